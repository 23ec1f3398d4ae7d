// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{generation_service, setup_repository, RejectingQueue, StubGenerator};
use autoseo::application::dto::generate_site_request::GenerateSiteRequestDto;
use autoseo::application::usecases::create_site::{CreateSiteError, CreateSiteUseCase};
use autoseo::domain::models::site::SiteStatus;
use autoseo::domain::models::generation_job::{GenerationJob, GenerationParams};
use autoseo::queue::job_queue::{ChannelJobQueue, JobQueue};
use autoseo::utils::errors::WorkerError;
use autoseo::workers::generation_worker::{GenerationWorker, InFlightJobs};
use autoseo::workers::Worker;
use autoseo::workers::manager::{WorkerManager, SHUTDOWN_REASON};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[tokio::test]
async fn test_workers_drain_queued_jobs_on_shutdown() {
    let repository = setup_repository().await;
    let queue: Arc<dyn JobQueue> = Arc::new(ChannelJobQueue::new());
    let service = generation_service(
        repository.clone(),
        Arc::new(StubGenerator::returning("Generated article")),
    );

    let mut manager = WorkerManager::new(queue.clone(), service);
    manager.start_workers(2);
    assert_eq!(manager.worker_count(), 2);

    let use_case = CreateSiteUseCase::new(repository.clone(), queue.clone());
    let mut ids = Vec::new();
    for keyword in ["solar panels", "heat pumps", "wind turbines"] {
        let site = use_case
            .execute(GenerateSiteRequestDto::for_keyword(keyword))
            .await
            .unwrap();
        assert_eq!(site.status, SiteStatus::Pending);
        ids.push(site.id);
    }

    manager.shutdown(Duration::from_secs(10)).await;
    assert_eq!(manager.worker_count(), 0);

    for id in ids {
        let site = repository.get(id).await.unwrap();
        assert_eq!(site.status, SiteStatus::Deployed);
        assert!(site.content.is_some());
    }
}

#[tokio::test]
async fn test_queue_rejects_jobs_after_shutdown() {
    let repository = setup_repository().await;
    let queue: Arc<dyn JobQueue> = Arc::new(ChannelJobQueue::new());
    let service = generation_service(repository.clone(), Arc::new(StubGenerator::returning("x")));

    let mut manager = WorkerManager::new(queue.clone(), service);
    manager.start_workers(0);
    assert_eq!(manager.worker_count(), 1);
    manager.shutdown(Duration::from_secs(1)).await;

    let result = CreateSiteUseCase::new(repository.clone(), queue)
        .execute(GenerateSiteRequestDto::for_keyword("too late"))
        .await;
    assert!(matches!(result, Err(CreateSiteError::Queue(_))));
    assert_eq!(repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_unqueued_site_is_marked_failed() {
    let repository = setup_repository().await;

    let result = CreateSiteUseCase::new(repository.clone(), Arc::new(RejectingQueue))
        .execute(GenerateSiteRequestDto::for_keyword("lost job"))
        .await;
    assert!(matches!(result, Err(CreateSiteError::Queue(_))));

    let sites = repository.list().await.unwrap();
    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0].status, SiteStatus::Failed);
    assert!(sites[0]
        .error_message()
        .is_some_and(|e| e.contains("could not be queued")));
    assert_eq!(
        repository
            .count_by_status(SiteStatus::Pending)
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn test_aborted_shutdown_fails_unfinished_sites() {
    let repository = setup_repository().await;
    let queue: Arc<dyn JobQueue> = Arc::new(ChannelJobQueue::new());
    let service = generation_service(repository.clone(), Arc::new(StubGenerator::hanging()));

    let mut manager = WorkerManager::new(queue.clone(), service);
    manager.start_workers(1);

    let use_case = CreateSiteUseCase::new(repository.clone(), queue.clone());
    let first = use_case
        .execute(GenerateSiteRequestDto::for_keyword("stuck job"))
        .await
        .unwrap();
    let second = use_case
        .execute(GenerateSiteRequestDto::for_keyword("queued job"))
        .await
        .unwrap();

    // Let the single worker pick up the first job and block on the generator
    tokio::time::sleep(Duration::from_millis(100)).await;
    manager.shutdown(Duration::from_millis(200)).await;

    for id in [first.id, second.id] {
        let site = repository.get(id).await.unwrap();
        assert_eq!(site.status, SiteStatus::Failed);
        assert_eq!(site.error_message(), Some(SHUTDOWN_REASON));
        assert!(site.content.is_none());
    }
}

#[tokio::test]
async fn test_worker_stops_when_job_registry_is_poisoned() {
    let repository = setup_repository().await;
    let queue: Arc<dyn JobQueue> = Arc::new(ChannelJobQueue::new());
    let service = generation_service(repository, Arc::new(StubGenerator::returning("x")));

    let in_flight: InFlightJobs = Arc::new(Mutex::new(HashSet::new()));
    let poisoner = in_flight.clone();
    let _ = std::thread::spawn(move || {
        let _guard = poisoner.lock().unwrap();
        panic!("poison the registry");
    })
    .join();

    queue
        .enqueue(GenerationJob::new(1, GenerationParams::for_keyword("any keyword")))
        .await
        .unwrap();

    let worker = GenerationWorker::new(queue, service, in_flight);
    let result = worker.run().await;
    assert!(matches!(result, Err(WorkerError::InternalError(_))));
}
