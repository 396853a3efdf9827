//! # Quote Orchestration Service
//!
//! Use-case layer sequencing load → domain mutation → persist → publish as
//! one logical operation per request.
//!
//! Guarantees:
//!
//! - Events are published only after a successful save; a failed save
//!   leaves persisted state untouched and publishes nothing.
//! - A publish failure after the save surfaces as a distinct
//!   partial-success error; the persisted state is already correct.
//! - Version conflicts retry the whole load-mutate-save cycle a bounded
//!   number of times against fresh state, then surface as
//!   `ConcurrentModification`. Domain errors are never retried.
//! - The authenticated tenant is an explicit parameter on every operation;
//!   nothing is read from ambient state.

use crate::application::dto::quote_request_dto::CreateQuoteRequestCommand;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::quote_request::QuoteRequest;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::events::quote_events::{
    QuoteEvent, QuoteRequestCancelled, QuoteRequestCreated, ResponseAccepted, ResponseSubmitted,
};
use crate::domain::value_objects::{Price, QuoteRequestId, TenantId};
use crate::infrastructure::messaging::EventPublisher;
use crate::infrastructure::persistence::traits::QuoteRequestRepository;
use std::sync::Arc;
use tracing::{error, info, warn};

/// How many load-mutate-save cycles a version conflict is retried before
/// the caller sees `ConcurrentModification`.
const MAX_SAVE_ATTEMPTS: u32 = 3;

/// Orchestrates the quote-request workflow against the repository and the
/// event bus.
#[derive(Debug)]
pub struct QuoteOrchestrationService {
    repository: Arc<dyn QuoteRequestRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl QuoteOrchestrationService {
    /// Creates the service over its two collaborators.
    #[must_use]
    pub fn new(
        repository: Arc<dyn QuoteRequestRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
        }
    }

    /// Creates a quote request with its full responder set and publishes
    /// `quote_request.created`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an empty or duplicated responder list,
    /// a `Repository` error if persistence fails (no event is published),
    /// or `EventPublish` if the event could not be sent after the save.
    pub async fn create_quote_request(
        &self,
        command: CreateQuoteRequestCommand,
    ) -> ApplicationResult<QuoteRequest> {
        command.validate().map_err(ApplicationError::validation)?;

        let quote_request = QuoteRequest::new(
            command.requester_id,
            command.voyage_data,
            &command.responder_ids,
        )?;
        let saved = self.repository.create(&quote_request).await?;

        info!(
            quote_request_id = %saved.id(),
            requester_id = %saved.requester_id(),
            responders = saved.responder_assignments().len(),
            "quote request created"
        );

        let event = QuoteEvent::Created(QuoteRequestCreated::new(
            saved.id(),
            saved.requester_id().clone(),
            saved.responder_ids(),
            saved.voyage_data().clone(),
        ));
        self.publish(saved.id(), &event).await?;

        Ok(saved)
    }

    /// Records a responder's priced response and publishes
    /// `quote_request.response_submitted`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown quote request; domain errors
    /// (`ResponderNotFound`, `AlreadySubmitted`, `AlreadyFinalized`)
    /// propagate unchanged.
    pub async fn submit_response(
        &self,
        quote_request_id: QuoteRequestId,
        responder_id: TenantId,
        price: Price,
        comments: impl Into<String> + Send,
    ) -> ApplicationResult<QuoteRequest> {
        let comments = comments.into();
        let saved = self
            .mutate(quote_request_id, |quote_request| {
                quote_request.submit_response(&responder_id, price, comments.clone())
            })
            .await?;

        info!(
            quote_request_id = %quote_request_id,
            responder_id = %responder_id,
            "quote response submitted"
        );

        let event = QuoteEvent::ResponseSubmitted(ResponseSubmitted::new(
            quote_request_id,
            responder_id,
            price,
            comments,
        ));
        self.publish(quote_request_id, &event).await?;

        Ok(saved)
    }

    /// Accepts one responder's submitted response on behalf of the
    /// requester, rejecting every other submitted response in the same
    /// commit, and publishes `quote_request.response_accepted`.
    ///
    /// Only the creating tenant may accept.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown quote request, `Unauthorized` on a
    /// requester mismatch; domain errors propagate unchanged.
    pub async fn accept_response(
        &self,
        quote_request_id: QuoteRequestId,
        responder_id: TenantId,
        requester_id: TenantId,
    ) -> ApplicationResult<QuoteRequest> {
        let saved = self
            .mutate(quote_request_id, |quote_request| {
                authorize(quote_request, &requester_id)?;
                quote_request.accept_response(&responder_id)
            })
            .await?;

        let rejected_responder_ids = saved.rejected_responder_ids();
        info!(
            quote_request_id = %quote_request_id,
            responder_id = %responder_id,
            rejected = rejected_responder_ids.len(),
            "quote response accepted"
        );

        let event = QuoteEvent::ResponseAccepted(ResponseAccepted::new(
            quote_request_id,
            responder_id,
            rejected_responder_ids,
        ));
        self.publish(quote_request_id, &event).await?;

        Ok(saved)
    }

    /// Cancels a quote request on behalf of the requester and publishes
    /// `quote_request.cancelled`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown quote request, `Unauthorized` on a
    /// requester mismatch, `AlreadyFinalized` if already finalized.
    pub async fn cancel_quote_request(
        &self,
        quote_request_id: QuoteRequestId,
        requester_id: TenantId,
    ) -> ApplicationResult<QuoteRequest> {
        let saved = self
            .mutate(quote_request_id, |quote_request| {
                authorize(quote_request, &requester_id)?;
                quote_request.cancel()
            })
            .await?;

        info!(quote_request_id = %quote_request_id, "quote request cancelled");

        let event = QuoteEvent::Cancelled(QuoteRequestCancelled::new(
            quote_request_id,
            saved.responder_ids(),
        ));
        self.publish(quote_request_id, &event).await?;

        Ok(saved)
    }

    /// Lists a requester's quote requests, newest first. Pure read-through.
    ///
    /// # Errors
    ///
    /// Returns a `Repository` error if the query fails.
    pub async fn find_by_requester(
        &self,
        requester_id: &TenantId,
    ) -> ApplicationResult<Vec<QuoteRequest>> {
        Ok(self.repository.find_by_requester(requester_id).await?)
    }

    /// Lists quote requests still awaiting a response from a responder.
    /// Pure read-through.
    ///
    /// # Errors
    ///
    /// Returns a `Repository` error if the query fails.
    pub async fn find_pending_by_responder(
        &self,
        responder_id: &TenantId,
    ) -> ApplicationResult<Vec<QuoteRequest>> {
        Ok(self
            .repository
            .find_pending_by_responder(responder_id)
            .await?)
    }

    async fn load(&self, quote_request_id: QuoteRequestId) -> ApplicationResult<QuoteRequest> {
        self.repository
            .get(&quote_request_id)
            .await?
            .ok_or(ApplicationError::NotFound { quote_request_id })
    }

    /// Runs one load-mutate-save cycle, retrying on version conflicts
    /// against freshly loaded state. Domain errors abort immediately; they
    /// represent caller misuse, not contention.
    async fn mutate<F>(
        &self,
        quote_request_id: QuoteRequestId,
        mut op: F,
    ) -> ApplicationResult<QuoteRequest>
    where
        F: FnMut(&mut QuoteRequest) -> DomainResult<()> + Send,
    {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let mut quote_request = self.load(quote_request_id).await?;
            op(&mut quote_request)?;

            match self.repository.save(&quote_request).await {
                Ok(saved) => return Ok(saved),
                Err(e) if e.is_version_conflict() && attempt < MAX_SAVE_ATTEMPTS => {
                    warn!(
                        quote_request_id = %quote_request_id,
                        attempt,
                        "optimistic lock conflict, reloading"
                    );
                }
                Err(e) if e.is_version_conflict() => {
                    return Err(ApplicationError::ConcurrentModification {
                        quote_request_id,
                        attempts: attempt,
                    });
                }
                Err(e) => return Err(ApplicationError::Repository(e)),
            }
        }
    }

    async fn publish(
        &self,
        quote_request_id: QuoteRequestId,
        event: &QuoteEvent,
    ) -> ApplicationResult<()> {
        self.event_publisher.publish(event).await.map_err(|source| {
            error!(
                quote_request_id = %quote_request_id,
                routing_key = event.routing_key(),
                error = %source,
                "event publish failed after commit; state is persisted"
            );
            ApplicationError::EventPublish {
                quote_request_id,
                source,
            }
        })
    }
}

fn authorize(quote_request: &QuoteRequest, requester_id: &TenantId) -> DomainResult<()> {
    if quote_request.requester_id() != requester_id {
        return Err(DomainError::Unauthorized {
            quote_request_id: quote_request.id(),
            tenant_id: requester_id.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
#[allow(clippy::indexing_slicing)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{
        CargoType, Port, QuoteRequestStatus, ResponseStatus, Timestamp, VesselType, VoyageData,
    };
    use crate::infrastructure::messaging::{
        InMemoryEventPublisher, PublishError, PublishResult,
    };
    use crate::infrastructure::persistence::in_memory::InMemoryQuoteRequestRepository;
    use crate::infrastructure::persistence::traits::{RepositoryError, RepositoryResult};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn test_voyage() -> VoyageData {
        VoyageData::new(
            Port::new("NLRTM", "Rotterdam").unwrap(),
            Port::new("SGSIN", "Singapore").unwrap(),
            CargoType::Container,
            18_500.0,
            VesselType::ContainerShip,
            Timestamp::now().add_secs(86_400),
        )
        .unwrap()
    }

    fn create_command(responders: &[&str]) -> CreateQuoteRequestCommand {
        CreateQuoteRequestCommand::new(
            TenantId::new("shipper-atlantic"),
            test_voyage(),
            responders.iter().copied().map(TenantId::new).collect(),
        )
    }

    fn test_price() -> Price {
        Price::from_major_units(1000).unwrap()
    }

    struct Harness {
        service: QuoteOrchestrationService,
        repository: InMemoryQuoteRequestRepository,
        publisher: InMemoryEventPublisher,
    }

    fn harness() -> Harness {
        let repository = InMemoryQuoteRequestRepository::new();
        let publisher = InMemoryEventPublisher::new();
        let service = QuoteOrchestrationService::new(
            Arc::new(repository.clone()),
            Arc::new(publisher.clone()),
        );
        Harness {
            service,
            repository,
            publisher,
        }
    }

    /// Publisher that always fails; simulates a broker outage after commit.
    #[derive(Debug, Default)]
    struct FailingEventPublisher;

    #[async_trait]
    impl EventPublisher for FailingEventPublisher {
        async fn publish(&self, _event: &QuoteEvent) -> PublishResult<()> {
            Err(PublishError::delivery("broker unavailable"))
        }
    }

    /// Repository wrapper that reports a version conflict on the first
    /// `conflicts` saves, then delegates.
    #[derive(Debug)]
    struct ConflictingRepository {
        inner: InMemoryQuoteRequestRepository,
        conflicts_remaining: AtomicU32,
    }

    impl ConflictingRepository {
        fn new(inner: InMemoryQuoteRequestRepository, conflicts: u32) -> Self {
            Self {
                inner,
                conflicts_remaining: AtomicU32::new(conflicts),
            }
        }
    }

    #[async_trait]
    impl QuoteRequestRepository for ConflictingRepository {
        async fn create(&self, quote_request: &QuoteRequest) -> RepositoryResult<QuoteRequest> {
            self.inner.create(quote_request).await
        }

        async fn get(&self, id: &QuoteRequestId) -> RepositoryResult<Option<QuoteRequest>> {
            self.inner.get(id).await
        }

        async fn find_by_requester(
            &self,
            requester_id: &TenantId,
        ) -> RepositoryResult<Vec<QuoteRequest>> {
            self.inner.find_by_requester(requester_id).await
        }

        async fn find_pending_by_responder(
            &self,
            responder_id: &TenantId,
        ) -> RepositoryResult<Vec<QuoteRequest>> {
            self.inner.find_pending_by_responder(responder_id).await
        }

        async fn save(&self, quote_request: &QuoteRequest) -> RepositoryResult<QuoteRequest> {
            let remaining = self.conflicts_remaining.load(Ordering::SeqCst);
            if remaining > 0 {
                self.conflicts_remaining.store(remaining - 1, Ordering::SeqCst);
                return Err(RepositoryError::version_conflict(
                    "QuoteRequest",
                    quote_request.id().to_string(),
                    quote_request.version(),
                    quote_request.version() + 1,
                ));
            }
            self.inner.save(quote_request).await
        }

        async fn delete(&self, id: &QuoteRequestId) -> RepositoryResult<bool> {
            self.inner.delete(id).await
        }
    }

    mod create {
        use super::*;

        #[tokio::test]
        async fn creates_pending_aggregate_and_publishes() {
            let h = harness();
            let created = h
                .service
                .create_quote_request(create_command(&["carrier-a", "carrier-b"]))
                .await
                .unwrap();

            assert_eq!(created.status(), QuoteRequestStatus::Pending);
            assert_eq!(created.responder_assignments().len(), 2);

            let stored = h.repository.get(&created.id()).await.unwrap().unwrap();
            assert_eq!(stored.version(), created.version());

            let published = h.publisher.published().await;
            assert_eq!(published.len(), 1);
            assert_eq!(published[0].routing_key, "quote_request.created");
            match &published[0].payload {
                QuoteEvent::Created(event) => {
                    assert_eq!(event.requester_id.as_str(), "shipper-atlantic");
                    assert_eq!(event.responder_ids.len(), 2);
                }
                other => panic!("unexpected event: {other:?}"),
            }
        }

        #[tokio::test]
        async fn empty_responder_list_is_rejected_before_persistence() {
            let h = harness();
            let result = h.service.create_quote_request(create_command(&[])).await;

            assert!(matches!(
                result,
                Err(ApplicationError::ValidationError(_))
            ));
            assert!(h.repository.is_empty());
            assert!(h.publisher.is_empty());
        }

        #[tokio::test]
        async fn duplicate_responders_are_rejected() {
            let h = harness();
            let result = h
                .service
                .create_quote_request(create_command(&["carrier-a", "carrier-a"]))
                .await;

            assert!(matches!(
                result,
                Err(ApplicationError::ValidationError(_))
            ));
        }
    }

    mod submit {
        use super::*;

        #[tokio::test]
        async fn submit_updates_assignment_and_publishes() {
            let h = harness();
            let created = h
                .service
                .create_quote_request(create_command(&["carrier-a", "carrier-b"]))
                .await
                .unwrap();

            h.service
                .submit_response(
                    created.id(),
                    TenantId::new("carrier-a"),
                    test_price(),
                    "14 day transit",
                )
                .await
                .unwrap();

            let stored = h.repository.get(&created.id()).await.unwrap().unwrap();
            let assignment = stored.find_responder(&TenantId::new("carrier-a")).unwrap();
            assert_eq!(assignment.status(), ResponseStatus::Submitted);
            assert_eq!(assignment.price(), Some(test_price()));
            assert_eq!(
                stored
                    .find_responder(&TenantId::new("carrier-b"))
                    .unwrap()
                    .status(),
                ResponseStatus::Pending
            );

            let keys = h.publisher.routing_keys().await;
            assert_eq!(keys[1], "quote_request.response_submitted");
        }

        #[tokio::test]
        async fn unknown_quote_request_is_not_found() {
            let h = harness();
            let result = h
                .service
                .submit_response(
                    QuoteRequestId::new_v4(),
                    TenantId::new("carrier-a"),
                    test_price(),
                    "ok",
                )
                .await;

            assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
        }

        #[tokio::test]
        async fn unknown_responder_propagates_domain_error() {
            let h = harness();
            let created = h
                .service
                .create_quote_request(create_command(&["carrier-a"]))
                .await
                .unwrap();

            let result = h
                .service
                .submit_response(created.id(), TenantId::new("ghost"), test_price(), "ok")
                .await;

            assert!(matches!(
                result,
                Err(ApplicationError::Domain(
                    DomainError::ResponderNotFound { .. }
                ))
            ));
        }

        #[tokio::test]
        async fn duplicate_submission_fails_and_publishes_nothing_new() {
            let h = harness();
            let created = h
                .service
                .create_quote_request(create_command(&["carrier-a"]))
                .await
                .unwrap();
            h.service
                .submit_response(created.id(), TenantId::new("carrier-a"), test_price(), "a")
                .await
                .unwrap();
            let events_before = h.publisher.len();

            let result = h
                .service
                .submit_response(created.id(), TenantId::new("carrier-a"), test_price(), "b")
                .await;

            assert!(matches!(
                result,
                Err(ApplicationError::Domain(DomainError::AlreadySubmitted { .. }))
            ));
            assert_eq!(h.publisher.len(), events_before);
        }
    }

    mod accept {
        use super::*;

        #[tokio::test]
        async fn accept_rejects_other_submitted_and_publishes_outcome() {
            let h = harness();
            let created = h
                .service
                .create_quote_request(create_command(&["carrier-a", "carrier-b", "carrier-c"]))
                .await
                .unwrap();
            for responder in ["carrier-a", "carrier-b"] {
                h.service
                    .submit_response(created.id(), TenantId::new(responder), test_price(), "q")
                    .await
                    .unwrap();
            }

            let accepted = h
                .service
                .accept_response(
                    created.id(),
                    TenantId::new("carrier-a"),
                    TenantId::new("shipper-atlantic"),
                )
                .await
                .unwrap();

            assert_eq!(accepted.status(), QuoteRequestStatus::Accepted);
            assert_eq!(
                accepted
                    .find_responder(&TenantId::new("carrier-c"))
                    .unwrap()
                    .status(),
                ResponseStatus::Pending
            );

            let published = h.publisher.published().await;
            let last = published.last().unwrap();
            assert_eq!(last.routing_key, "quote_request.response_accepted");
            match &last.payload {
                QuoteEvent::ResponseAccepted(event) => {
                    assert_eq!(event.responder_id.as_str(), "carrier-a");
                    assert_eq!(event.rejected_responder_ids.len(), 1);
                    assert_eq!(event.rejected_responder_ids[0].as_str(), "carrier-b");
                }
                other => panic!("unexpected event: {other:?}"),
            }
        }

        #[tokio::test]
        async fn accept_by_non_requester_is_unauthorized() {
            let h = harness();
            let created = h
                .service
                .create_quote_request(create_command(&["carrier-a"]))
                .await
                .unwrap();
            h.service
                .submit_response(created.id(), TenantId::new("carrier-a"), test_price(), "q")
                .await
                .unwrap();
            let events_before = h.publisher.len();

            let result = h
                .service
                .accept_response(
                    created.id(),
                    TenantId::new("carrier-a"),
                    TenantId::new("someone-else"),
                )
                .await;

            assert!(matches!(
                result,
                Err(ApplicationError::Domain(DomainError::Unauthorized { .. }))
            ));
            let stored = h.repository.get(&created.id()).await.unwrap().unwrap();
            assert_eq!(stored.status(), QuoteRequestStatus::Pending);
            assert_eq!(h.publisher.len(), events_before);
        }

        #[tokio::test]
        async fn second_accept_fails_already_finalized_and_state_is_unchanged() {
            let h = harness();
            let created = h
                .service
                .create_quote_request(create_command(&["carrier-a", "carrier-b"]))
                .await
                .unwrap();
            for responder in ["carrier-a", "carrier-b"] {
                h.service
                    .submit_response(created.id(), TenantId::new(responder), test_price(), "q")
                    .await
                    .unwrap();
            }
            h.service
                .accept_response(
                    created.id(),
                    TenantId::new("carrier-a"),
                    TenantId::new("shipper-atlantic"),
                )
                .await
                .unwrap();
            let snapshot = h.repository.get(&created.id()).await.unwrap().unwrap();

            let result = h
                .service
                .accept_response(
                    created.id(),
                    TenantId::new("carrier-b"),
                    TenantId::new("shipper-atlantic"),
                )
                .await;

            assert!(matches!(
                result,
                Err(ApplicationError::Domain(DomainError::AlreadyFinalized { .. }))
            ));
            let after = h.repository.get(&created.id()).await.unwrap().unwrap();
            assert_eq!(after, snapshot);
        }
    }

    mod cancel {
        use super::*;

        #[tokio::test]
        async fn cancel_publishes_all_responder_ids() {
            let h = harness();
            let created = h
                .service
                .create_quote_request(create_command(&["carrier-a", "carrier-b"]))
                .await
                .unwrap();

            let cancelled = h
                .service
                .cancel_quote_request(created.id(), TenantId::new("shipper-atlantic"))
                .await
                .unwrap();

            assert_eq!(cancelled.status(), QuoteRequestStatus::Cancelled);
            for assignment in cancelled.responder_assignments() {
                assert_eq!(assignment.status(), ResponseStatus::Cancelled);
            }

            let published = h.publisher.published().await;
            let last = published.last().unwrap();
            assert_eq!(last.routing_key, "quote_request.cancelled");
            match &last.payload {
                QuoteEvent::Cancelled(event) => {
                    assert_eq!(event.responder_ids.len(), 2);
                }
                other => panic!("unexpected event: {other:?}"),
            }
        }

        #[tokio::test]
        async fn cancel_by_non_requester_is_unauthorized() {
            let h = harness();
            let created = h
                .service
                .create_quote_request(create_command(&["carrier-a"]))
                .await
                .unwrap();

            let result = h
                .service
                .cancel_quote_request(created.id(), TenantId::new("carrier-a"))
                .await;

            assert!(matches!(
                result,
                Err(ApplicationError::Domain(DomainError::Unauthorized { .. }))
            ));
        }
    }

    mod publish_failure {
        use super::*;

        #[tokio::test]
        async fn publish_failure_after_save_is_partial_success() {
            let repository = InMemoryQuoteRequestRepository::new();
            let service = QuoteOrchestrationService::new(
                Arc::new(repository.clone()),
                Arc::new(FailingEventPublisher),
            );

            let result = service
                .create_quote_request(create_command(&["carrier-a"]))
                .await;

            let err = result.unwrap_err();
            assert!(err.is_partial_success());
            assert!(matches!(err, ApplicationError::EventPublish { .. }));
            // The aggregate was persisted before the publish attempt.
            assert_eq!(repository.len(), 1);
        }
    }

    mod concurrency {
        use super::*;

        #[tokio::test]
        async fn transient_conflicts_are_retried_against_fresh_state() {
            let inner = InMemoryQuoteRequestRepository::new();
            let repository = Arc::new(ConflictingRepository::new(inner.clone(), 2));
            let publisher = InMemoryEventPublisher::new();
            let service =
                QuoteOrchestrationService::new(repository, Arc::new(publisher.clone()));

            let created = service
                .create_quote_request(create_command(&["carrier-a"]))
                .await
                .unwrap();

            let result = service
                .submit_response(created.id(), TenantId::new("carrier-a"), test_price(), "q")
                .await;

            assert!(result.is_ok());
            let stored = inner.get(&created.id()).await.unwrap().unwrap();
            assert!(
                stored
                    .find_responder(&TenantId::new("carrier-a"))
                    .unwrap()
                    .has_submitted_response()
            );
        }

        #[tokio::test]
        async fn persistent_conflicts_surface_after_bounded_retries() {
            let inner = InMemoryQuoteRequestRepository::new();
            let repository = Arc::new(ConflictingRepository::new(inner.clone(), u32::MAX));
            let publisher = InMemoryEventPublisher::new();
            let service =
                QuoteOrchestrationService::new(repository, Arc::new(publisher.clone()));

            let created = service
                .create_quote_request(create_command(&["carrier-a"]))
                .await
                .unwrap();
            let events_before = publisher.len();

            let result = service
                .submit_response(created.id(), TenantId::new("carrier-a"), test_price(), "q")
                .await;

            assert!(matches!(
                result,
                Err(ApplicationError::ConcurrentModification { attempts: 3, .. })
            ));
            // Losing writer published nothing.
            assert_eq!(publisher.len(), events_before);
        }
    }

    mod reads {
        use super::*;

        #[tokio::test]
        async fn read_throughs_delegate_to_repository() {
            let h = harness();
            let created = h
                .service
                .create_quote_request(create_command(&["carrier-a"]))
                .await
                .unwrap();

            let by_requester = h
                .service
                .find_by_requester(&TenantId::new("shipper-atlantic"))
                .await
                .unwrap();
            assert_eq!(by_requester.len(), 1);
            assert_eq!(by_requester[0].id(), created.id());

            let pending = h
                .service
                .find_pending_by_responder(&TenantId::new("carrier-a"))
                .await
                .unwrap();
            assert_eq!(pending.len(), 1);

            assert!(
                h.service
                    .find_pending_by_responder(&TenantId::new("carrier-z"))
                    .await
                    .unwrap()
                    .is_empty()
            );
        }
    }
}
