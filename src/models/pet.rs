use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
pub struct Pet {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub kind: String,
    pub breed: Option<String>,
    pub age: Option<String>,
    pub weight: Option<String>,
    pub color: Option<String>,
    pub microchip_id: Option<String>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PetInput {
    #[schema(example = "Buddy")]
    pub name: String,

    #[schema(example = "dog")]
    pub kind: String,

    #[schema(example = "Golden Retriever")]
    pub breed: Option<String>,

    #[schema(example = "3 years")]
    pub age: Option<String>,

    #[schema(example = "28 kg")]
    pub weight: Option<String>,

    pub color: Option<String>,
    pub microchip_id: Option<String>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
}
