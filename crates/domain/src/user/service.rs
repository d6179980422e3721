//! User service trait and in-memory implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use common::{
    HealthState, MaintenanceError, Page, PageRequest, ServiceName, Status, failed_precondition,
    paginate, unavailable,
};

use super::{GET_USER_SUBJECT, User, UserErrorReason, UserFailureCode, UserId, seed};
use crate::telemetry;

/// Operations of the user service.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Returns an active user.
    ///
    /// Checks run in order: maintenance, existence, suspension.
    async fn get_user(&self, user_id: &str) -> Result<User, Status>;

    /// Returns one page of all users, ordered by identifier.
    async fn list_users(&self, page: PageRequest) -> Result<Page<User>, Status>;
}

/// User service over a map that is read-only after construction.
#[derive(Debug, Clone)]
pub struct InMemoryUserService {
    users: Arc<BTreeMap<UserId, User>>,
    health: HealthState,
}

impl InMemoryUserService {
    /// Creates a service owning `users`.
    pub fn new(users: impl IntoIterator<Item = User>, health: HealthState) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();
        Self {
            users: Arc::new(users),
            health,
        }
    }

    /// Creates a service holding the seed users.
    pub fn seeded(health: HealthState) -> Self {
        Self::new(seed::users(Utc::now()), health)
    }

    /// Returns the health cell this service reads on every lookup.
    pub fn health(&self) -> &HealthState {
        &self.health
    }

    fn lookup(&self, user_id: &str) -> Result<User, Status> {
        if !self.health.get().accepts_requests() {
            return Err(unavailable(
                &MaintenanceError {
                    service: ServiceName::Users.label(),
                },
                &UserErrorReason::Maintenance,
            ));
        }

        let Some(user) = self.users.get(user_id) else {
            return Err(failed_precondition(
                &UserFailureCode::UserNotFound,
                GET_USER_SUBJECT,
                format!("User not found: {user_id}"),
            ));
        };

        if user.is_suspended() {
            return Err(failed_precondition(
                &UserFailureCode::UserAccountSuspended,
                GET_USER_SUBJECT,
                "This account has been suspended.",
            ));
        }

        Ok(user.clone())
    }
}

#[async_trait]
impl UserService for InMemoryUserService {
    #[tracing::instrument(skip(self))]
    async fn get_user(&self, user_id: &str) -> Result<User, Status> {
        let result = self.lookup(user_id);
        if let Err(status) = &result {
            tracing::debug!(%status, "GetUser rejected");
        }
        telemetry::record(ServiceName::Users, "GetUser", &result);
        result
    }

    #[tracing::instrument(skip(self))]
    async fn list_users(&self, page: PageRequest) -> Result<Page<User>, Status> {
        let users: Vec<User> = self.users.values().cloned().collect();
        let result = Ok(paginate(&users, page));
        telemetry::record(ServiceName::Users, "ListUsers", &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::AccountStatus;
    use common::{Code, ServiceHealth};

    fn service() -> InMemoryUserService {
        InMemoryUserService::seeded(HealthState::default())
    }

    #[tokio::test]
    async fn test_get_active_user() {
        let user = service().get_user("user-001").await.unwrap();
        assert_eq!(user.name, "Alice Johnson");
        assert_eq!(user.account_status, AccountStatus::Active);
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let status = service().get_user("user-404").await.unwrap_err();

        assert_eq!(status.code(), Code::FailedPrecondition);
        assert!(status.has_violation(&UserFailureCode::UserNotFound));
        let violation = status.violation().unwrap();
        assert_eq!(violation.subject, "UserService/GetUser");
        assert_eq!(violation.description, "User not found: user-404");
    }

    #[tokio::test]
    async fn test_suspended_user_is_rejected() {
        let status = service().get_user("user-999").await.unwrap_err();

        assert!(status.has_violation(&UserFailureCode::UserAccountSuspended));
        assert_eq!(status.message(), "This account has been suspended.");
    }

    #[tokio::test]
    async fn test_maintenance_precedes_existence() {
        let service = InMemoryUserService::seeded(HealthState::new(ServiceHealth::Unavailable));

        for id in ["user-001", "user-404"] {
            let status = service.get_user(id).await.unwrap_err();
            assert_eq!(status.code(), Code::Unavailable);
            assert!(status.has_reason(&UserErrorReason::Maintenance));
            assert_eq!(status.message(), "user service is under maintenance");
        }
    }

    #[tokio::test]
    async fn test_draining_still_answers() {
        let service = service();
        service.health().set(ServiceHealth::Draining);

        assert!(service.get_user("user-002").await.is_ok());
    }

    #[tokio::test]
    async fn test_list_ignores_health_and_orders_by_id() {
        let service = InMemoryUserService::seeded(HealthState::new(ServiceHealth::Unavailable));

        let page = service.list_users(PageRequest::new(10, 0)).await.unwrap();

        let ids: Vec<&str> = page.items.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["user-001", "user-002", "user-003", "user-999"]);
        assert_eq!(page.total, 4);
    }

    #[tokio::test]
    async fn test_list_pages() {
        let page = service().list_users(PageRequest::new(2, 3)).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id.as_str(), "user-999");
        assert_eq!(page.total, 4);
    }
}
