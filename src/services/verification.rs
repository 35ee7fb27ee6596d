use crate::{
    error::{AppError, AppResult},
    models::role_record::{
        RequestFilter, Role, RoleRecord, RoleUpdateRequest, VerificationOutcome,
        VerificationRequest, VerificationStats, VerificationStatus, VerificationSubmission,
    },
    repositories::role_repository::RoleStore,
};
use std::sync::Arc;
use time::OffsetDateTime;

/// Credential-verification workflow over role records.
///
/// Status lifecycle: `unverified → pending → verified | rejected`, with
/// resubmission allowed from `rejected`. A record in `pending` is immutable
/// until an admin decides it; `verified` is terminal.
pub struct VerificationService {
    store: Arc<dyn RoleStore>,
}

impl VerificationService {
    pub fn new(store: Arc<dyn RoleStore>) -> Self {
        Self { store }
    }

    pub async fn get_or_create_role(&self, user_id: &str) -> AppResult<RoleRecord> {
        if let Some(record) = self.store.get_role(user_id).await? {
            return Ok(record);
        }
        self.store
            .upsert_role(&RoleRecord::new(user_id, Role::Client))
            .await
    }

    pub async fn create_for_registration(
        &self,
        user_id: &str,
        role: Role,
        clinic_name: Option<String>,
        license_number: Option<String>,
    ) -> AppResult<RoleRecord> {
        let mut record = RoleRecord::new(user_id, role);
        record.clinic_name = clinic_name;
        record.license_number = license_number;
        self.store.upsert_role(&record).await
    }

    /// Account-level edits (role switch, clinic details). Refused while a
    /// verification request is pending.
    pub async fn update_role_profile(
        &self,
        user_id: &str,
        update: &RoleUpdateRequest,
    ) -> AppResult<RoleRecord> {
        let mut record = self.get_or_create_role(user_id).await?;

        if record.verification_status == VerificationStatus::Pending {
            return Err(AppError::Validation(
                "A submitted verification request cannot be edited until it is decided".to_string(),
            ));
        }

        record.role = update.role;
        record.clinic_name = update.clinic_name.clone().or(record.clinic_name);
        record.license_number = update.license_number.clone().or(record.license_number);

        self.store.upsert_role(&record).await
    }

    /// `unverified → pending` or `rejected → pending`.
    pub async fn submit_verification(
        &self,
        user_id: &str,
        submission: &VerificationSubmission,
    ) -> AppResult<RoleRecord> {
        let mut record = self
            .store
            .get_role(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Role record not found".to_string()))?;

        if record.role != Role::Veterinarian {
            return Err(AppError::Validation(
                "Only veterinarian accounts can request verification".to_string(),
            ));
        }

        if record.verification_status == VerificationStatus::Pending {
            return Err(AppError::Validation(
                "A verification request is already pending".to_string(),
            ));
        }

        let years = validate_submission(submission)?;

        record.business_address = Some(submission.business_address.trim().to_string());
        record.phone_number = Some(submission.phone_number.trim().to_string());
        record.years_of_experience = Some(years);
        record.education = Some(submission.education.trim().to_string());
        record.specializations = Some(submission.specializations.clone());
        if submission.verification_documents.is_some() {
            record.verification_documents = submission.verification_documents.clone();
        }
        record.verification_status = VerificationStatus::Pending;
        record.verification_submitted_at = Some(OffsetDateTime::now_utc());
        record.is_verified = false;

        self.store.upsert_role(&record).await
    }

    /// `pending → verified | rejected`. Admin only; the record is untouched
    /// on any failure.
    pub async fn decide(
        &self,
        caller_user_id: &str,
        request_id: &str,
        outcome: VerificationOutcome,
        notes: Option<String>,
    ) -> AppResult<RoleRecord> {
        let caller_role = self
            .store
            .get_role(caller_user_id)
            .await?
            .map(|r| r.role)
            .unwrap_or(Role::Client);

        if caller_role != Role::Admin {
            return Err(AppError::Forbidden(
                "Only administrators can decide verification requests".to_string(),
            ));
        }

        let mut record = self
            .store
            .get_role_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Verification request not found".to_string()))?;

        if record.verification_status != VerificationStatus::Pending {
            return Err(AppError::Validation(
                "Verification request is not pending".to_string(),
            ));
        }

        match outcome {
            VerificationOutcome::Verified => {
                record.verification_status = VerificationStatus::Verified;
                record.is_verified = true;
                record.verified_at = Some(OffsetDateTime::now_utc());
                record.verified_by = Some(caller_user_id.to_string());
            }
            VerificationOutcome::Rejected => {
                record.verification_status = VerificationStatus::Rejected;
                record.is_verified = false;
            }
        }

        if notes.is_some() {
            record.verification_notes = notes;
        }

        self.store.upsert_role(&record).await
    }

    pub async fn list_requests(&self, filter: &RequestFilter) -> AppResult<Vec<VerificationRequest>> {
        let requests = self.store.list_veterinarian_roles().await?;
        Ok(requests
            .into_iter()
            .filter(|r| matches_filter(r, filter))
            .collect())
    }

    pub async fn stats(&self) -> AppResult<VerificationStats> {
        let requests = self.store.list_veterinarian_roles().await?;
        let mut stats = VerificationStats {
            total: requests.len(),
            ..VerificationStats::default()
        };
        for request in &requests {
            match request.verification_status {
                VerificationStatus::Pending => stats.pending += 1,
                VerificationStatus::Verified => stats.verified += 1,
                VerificationStatus::Rejected => stats.rejected += 1,
                VerificationStatus::Unverified => stats.unverified += 1,
            }
        }
        Ok(stats)
    }
}

fn validate_submission(submission: &VerificationSubmission) -> AppResult<i32> {
    if submission.business_address.trim().is_empty() {
        return Err(AppError::Validation(
            "business address is required".to_string(),
        ));
    }
    if submission.phone_number.trim().is_empty() {
        return Err(AppError::Validation("phone number is required".to_string()));
    }
    if submission.education.trim().is_empty() {
        return Err(AppError::Validation("education is required".to_string()));
    }
    submission
        .years_of_experience
        .ok_or_else(|| AppError::Validation("years of experience is required".to_string()))
}

fn matches_filter(request: &VerificationRequest, filter: &RequestFilter) -> bool {
    if let Some(status) = filter.status {
        if request.verification_status != status {
            return false;
        }
    }

    match filter.search_text.as_deref().map(str::trim) {
        None | Some("") => true,
        Some(needle) => {
            let needle = needle.to_lowercase();
            let clinic = request.clinic_name.as_deref().unwrap_or("");
            clinic.to_lowercase().contains(&needle)
                || request.first_name.to_lowercase().contains(&needle)
                || request.last_name.to_lowercase().contains(&needle)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct InMemoryRoleStore {
        records: Mutex<HashMap<String, RoleRecord>>,
        names: HashMap<String, (String, String)>,
    }

    impl InMemoryRoleStore {
        fn new() -> Self {
            Self {
                records: Mutex::new(HashMap::new()),
                names: HashMap::new(),
            }
        }

        fn with_user(mut self, user_id: &str, first: &str, last: &str) -> Self {
            self.names
                .insert(user_id.to_string(), (first.to_string(), last.to_string()));
            self
        }

        fn seed(&self, record: RoleRecord) {
            self.records
                .lock()
                .unwrap()
                .insert(record.user_id.clone(), record);
        }

        fn snapshot(&self, user_id: &str) -> Option<RoleRecord> {
            self.records.lock().unwrap().get(user_id).cloned()
        }
    }

    #[async_trait]
    impl RoleStore for InMemoryRoleStore {
        async fn get_role(&self, user_id: &str) -> AppResult<Option<RoleRecord>> {
            Ok(self.records.lock().unwrap().get(user_id).cloned())
        }

        async fn get_role_by_id(&self, id: &str) -> AppResult<Option<RoleRecord>> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .values()
                .find(|r| r.id == id)
                .cloned())
        }

        async fn upsert_role(&self, record: &RoleRecord) -> AppResult<RoleRecord> {
            self.records
                .lock()
                .unwrap()
                .insert(record.user_id.clone(), record.clone());
            Ok(record.clone())
        }

        async fn list_veterinarian_roles(&self) -> AppResult<Vec<VerificationRequest>> {
            let mut requests: Vec<VerificationRequest> = self
                .records
                .lock()
                .unwrap()
                .values()
                .filter(|r| r.role == Role::Veterinarian)
                .map(|r| {
                    let (first, last) = self
                        .names
                        .get(&r.user_id)
                        .cloned()
                        .unwrap_or_else(|| (String::new(), String::new()));
                    VerificationRequest {
                        id: r.id.clone(),
                        user_id: r.user_id.clone(),
                        first_name: first,
                        last_name: last,
                        clinic_name: r.clinic_name.clone(),
                        license_number: r.license_number.clone(),
                        business_address: r.business_address.clone(),
                        phone_number: r.phone_number.clone(),
                        years_of_experience: r.years_of_experience,
                        education: r.education.clone(),
                        specializations: r.specializations.clone(),
                        verification_documents: r.verification_documents.clone(),
                        verification_status: r.verification_status,
                        verification_submitted_at: r.verification_submitted_at,
                        verified_at: r.verified_at,
                        verification_notes: r.verification_notes.clone(),
                    }
                })
                .collect();
            requests.sort_by(|a, b| {
                b.verification_submitted_at
                    .cmp(&a.verification_submitted_at)
            });
            Ok(requests)
        }
    }

    fn vet_record(user_id: &str, clinic: &str) -> RoleRecord {
        let mut record = RoleRecord::new(user_id, Role::Veterinarian);
        record.clinic_name = Some(clinic.to_string());
        record
    }

    fn submission() -> VerificationSubmission {
        VerificationSubmission {
            business_address: "123 Main St".to_string(),
            phone_number: "555-1111".to_string(),
            years_of_experience: Some(5),
            education: "DVM".to_string(),
            specializations: vec!["Surgery".to_string()],
            verification_documents: None,
        }
    }

    fn service_with(store: InMemoryRoleStore) -> (VerificationService, Arc<InMemoryRoleStore>) {
        let store = Arc::new(store);
        (VerificationService::new(store.clone()), store)
    }

    fn assert_mirror(record: &RoleRecord) {
        assert_eq!(
            record.is_verified,
            record.verification_status == VerificationStatus::Verified
        );
    }

    #[tokio::test]
    async fn submission_enters_pending() {
        let store = InMemoryRoleStore::new().with_user("vet-1", "Sarah", "Johnson");
        store.seed(vet_record("vet-1", "Happy Paws"));
        let (service, store) = service_with(store);

        let record = service
            .submit_verification("vet-1", &submission())
            .await
            .unwrap();

        assert_eq!(record.verification_status, VerificationStatus::Pending);
        assert!(record.verification_submitted_at.is_some());
        assert!(!record.is_verified);
        assert_eq!(record.business_address.as_deref(), Some("123 Main St"));
        assert_eq!(record.years_of_experience, Some(5));
        assert_mirror(&record);
        assert_mirror(&store.snapshot("vet-1").unwrap());
    }

    #[tokio::test]
    async fn missing_business_address_is_rejected() {
        let store = InMemoryRoleStore::new();
        store.seed(vet_record("vet-1", "Happy Paws"));
        let (service, store) = service_with(store);

        let mut incomplete = submission();
        incomplete.business_address = "   ".to_string();

        let err = service
            .submit_verification("vet-1", &incomplete)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(
            store.snapshot("vet-1").unwrap().verification_status,
            VerificationStatus::Unverified
        );
    }

    #[tokio::test]
    async fn pending_request_cannot_be_resubmitted() {
        let store = InMemoryRoleStore::new();
        store.seed(vet_record("vet-1", "Happy Paws"));
        let (service, _) = service_with(store);

        service
            .submit_verification("vet-1", &submission())
            .await
            .unwrap();
        let err = service
            .submit_verification("vet-1", &submission())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn rejected_request_can_be_resubmitted() {
        let store = InMemoryRoleStore::new();
        let mut record = vet_record("vet-1", "Happy Paws");
        record.verification_status = VerificationStatus::Rejected;
        store.seed(record);
        let (service, _) = service_with(store);

        let record = service
            .submit_verification("vet-1", &submission())
            .await
            .unwrap();

        assert_eq!(record.verification_status, VerificationStatus::Pending);
        assert_mirror(&record);
    }

    #[tokio::test]
    async fn non_veterinarian_cannot_submit() {
        let store = InMemoryRoleStore::new();
        store.seed(RoleRecord::new("client-1", Role::Client));
        let (service, _) = service_with(store);

        let err = service
            .submit_verification("client-1", &submission())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn decision_requires_admin() {
        let store = InMemoryRoleStore::new();
        store.seed(RoleRecord::new("client-1", Role::Client));
        let mut vet = vet_record("vet-1", "Happy Paws");
        vet.verification_status = VerificationStatus::Pending;
        let request_id = vet.id.clone();
        store.seed(vet);
        let (service, store) = service_with(store);

        let err = service
            .decide("client-1", &request_id, VerificationOutcome::Verified, None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Forbidden(_)));
        assert_eq!(
            store.snapshot("vet-1").unwrap().verification_status,
            VerificationStatus::Pending
        );
    }

    #[tokio::test]
    async fn admin_approval_marks_verified() {
        let store = InMemoryRoleStore::new();
        store.seed(RoleRecord::new("admin-1", Role::Admin));
        let mut vet = vet_record("vet-1", "Happy Paws");
        vet.verification_status = VerificationStatus::Pending;
        vet.verification_submitted_at = Some(OffsetDateTime::now_utc());
        let request_id = vet.id.clone();
        store.seed(vet);
        let (service, _) = service_with(store);

        let record = service
            .decide(
                "admin-1",
                &request_id,
                VerificationOutcome::Verified,
                Some("looks good".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(record.verification_status, VerificationStatus::Verified);
        assert!(record.is_verified);
        assert!(record.verified_at.is_some());
        assert_eq!(record.verified_by.as_deref(), Some("admin-1"));
        assert_eq!(record.verification_notes.as_deref(), Some("looks good"));
        assert_mirror(&record);
    }

    #[tokio::test]
    async fn admin_rejection_clears_verified_flag() {
        let store = InMemoryRoleStore::new();
        store.seed(RoleRecord::new("admin-1", Role::Admin));
        let mut vet = vet_record("vet-1", "Happy Paws");
        vet.verification_status = VerificationStatus::Pending;
        let request_id = vet.id.clone();
        store.seed(vet);
        let (service, _) = service_with(store);

        let record = service
            .decide(
                "admin-1",
                &request_id,
                VerificationOutcome::Rejected,
                Some("license expired".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(record.verification_status, VerificationStatus::Rejected);
        assert!(!record.is_verified);
        assert!(record.verified_at.is_none());
        assert_eq!(
            record.verification_notes.as_deref(),
            Some("license expired")
        );
        assert_mirror(&record);
    }

    #[tokio::test]
    async fn decision_on_unknown_request_is_not_found() {
        let store = InMemoryRoleStore::new();
        store.seed(RoleRecord::new("admin-1", Role::Admin));
        let (service, _) = service_with(store);

        let err = service
            .decide("admin-1", "missing", VerificationOutcome::Verified, None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn decision_on_non_pending_request_is_refused() {
        let store = InMemoryRoleStore::new();
        store.seed(RoleRecord::new("admin-1", Role::Admin));
        let mut vet = vet_record("vet-1", "Happy Paws");
        vet.verification_status = VerificationStatus::Verified;
        vet.is_verified = true;
        let request_id = vet.id.clone();
        store.seed(vet);
        let (service, store) = service_with(store);

        let err = service
            .decide("admin-1", &request_id, VerificationOutcome::Rejected, None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(store.snapshot("vet-1").unwrap().is_verified);
    }

    #[tokio::test]
    async fn mirror_invariant_holds_across_full_lifecycle() {
        let store = InMemoryRoleStore::new();
        store.seed(RoleRecord::new("admin-1", Role::Admin));
        store.seed(vet_record("vet-1", "Happy Paws"));
        let (service, store) = service_with(store);

        let submitted = service
            .submit_verification("vet-1", &submission())
            .await
            .unwrap();
        assert_mirror(&submitted);

        let rejected = service
            .decide(
                "admin-1",
                &submitted.id,
                VerificationOutcome::Rejected,
                None,
            )
            .await
            .unwrap();
        assert_mirror(&rejected);

        let resubmitted = service
            .submit_verification("vet-1", &submission())
            .await
            .unwrap();
        assert_mirror(&resubmitted);

        let verified = service
            .decide(
                "admin-1",
                &resubmitted.id,
                VerificationOutcome::Verified,
                None,
            )
            .await
            .unwrap();
        assert_mirror(&verified);
        assert_mirror(&store.snapshot("vet-1").unwrap());
    }

    #[tokio::test]
    async fn listing_filters_by_status_and_clinic_search() {
        let store = InMemoryRoleStore::new()
            .with_user("vet-1", "Sarah", "Johnson")
            .with_user("vet-2", "Mike", "Chen")
            .with_user("vet-3", "Emma", "Davis");

        let mut pending_match = vet_record("vet-1", "Happy Paws Clinic");
        pending_match.verification_status = VerificationStatus::Pending;
        store.seed(pending_match);

        let mut pending_other = vet_record("vet-2", "Animal Health Center");
        pending_other.verification_status = VerificationStatus::Pending;
        store.seed(pending_other);

        let mut verified_match = vet_record("vet-3", "Paws and Claws");
        verified_match.verification_status = VerificationStatus::Verified;
        verified_match.is_verified = true;
        store.seed(verified_match);

        let (service, _) = service_with(store);

        let filter = RequestFilter {
            status: Some(VerificationStatus::Pending),
            search_text: Some("PAWS".to_string()),
        };
        let results = service.list_requests(&filter).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].user_id, "vet-1");
    }

    #[tokio::test]
    async fn search_matches_owner_names() {
        let store = InMemoryRoleStore::new()
            .with_user("vet-1", "Sarah", "Johnson")
            .with_user("vet-2", "Mike", "Chen");
        store.seed(vet_record("vet-1", "Happy Paws"));
        store.seed(vet_record("vet-2", "Animal Health"));
        let (service, _) = service_with(store);

        let filter = RequestFilter {
            status: None,
            search_text: Some("john".to_string()),
        };
        let results = service.list_requests(&filter).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].first_name, "Sarah");
    }

    #[tokio::test]
    async fn stats_count_each_status() {
        let store = InMemoryRoleStore::new();
        let mut pending = vet_record("vet-1", "A");
        pending.verification_status = VerificationStatus::Pending;
        store.seed(pending);

        let mut verified = vet_record("vet-2", "B");
        verified.verification_status = VerificationStatus::Verified;
        verified.is_verified = true;
        store.seed(verified);

        store.seed(vet_record("vet-3", "C"));
        store.seed(RoleRecord::new("client-1", Role::Client));
        let (service, _) = service_with(store);

        let stats = service.stats().await.unwrap();

        assert_eq!(
            stats,
            VerificationStats {
                total: 3,
                pending: 1,
                verified: 1,
                rejected: 0,
                unverified: 1,
            }
        );
    }

    #[tokio::test]
    async fn profile_edits_are_refused_while_pending() {
        let store = InMemoryRoleStore::new();
        let mut vet = vet_record("vet-1", "Happy Paws");
        vet.verification_status = VerificationStatus::Pending;
        store.seed(vet);
        let (service, _) = service_with(store);

        let update = RoleUpdateRequest {
            role: Role::Veterinarian,
            clinic_name: Some("Renamed Clinic".to_string()),
            license_number: None,
        };
        let err = service
            .update_role_profile("vet-1", &update)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn get_or_create_defaults_to_client() {
        let (service, store) = service_with(InMemoryRoleStore::new());

        let record = service.get_or_create_role("new-user").await.unwrap();

        assert_eq!(record.role, Role::Client);
        assert_eq!(record.verification_status, VerificationStatus::Unverified);
        assert!(store.snapshot("new-user").is_some());
    }
}
