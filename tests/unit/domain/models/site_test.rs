// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use autoseo::domain::models::generation_job::GenerationParams;
    use autoseo::domain::models::site::{
        derive_domain, Deployment, DomainError, NewSite, Site, SiteStatus,
    };
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn pending_site() -> Site {
        let now = Utc::now().into();
        Site {
            id: 1,
            domain: "rust-tips-120000.auto-seo.app".to_string(),
            title: "rust tips".to_string(),
            keyword: "rust tips".to_string(),
            content: None,
            meta_description: None,
            meta_tags: None,
            cloud_provider: "aws".to_string(),
            cloud_url: None,
            status: SiteStatus::Pending,
            seo_score: 0,
            analytics: json!({}),
            created_at: now,
            updated_at: now,
        }
    }

    fn deployment() -> Deployment {
        Deployment {
            content: "<html></html>".to_string(),
            cloud_url: "https://demo.autoseo.app/site/1".to_string(),
            seo_score: 85,
            word_count: 2,
        }
    }

    #[test]
    fn test_site_lifecycle_to_deployed() {
        let site = pending_site().start_generation().unwrap();
        assert_eq!(site.status, SiteStatus::Generating);

        let site = site.deploy(deployment()).unwrap();
        assert_eq!(site.status, SiteStatus::Deployed);
        assert_eq!(site.seo_score, 85);
        assert_eq!(site.content.as_deref(), Some("<html></html>"));
        assert_eq!(site.analytics["word_count"], json!(2));
        assert!(site.analytics["deployment_time"].is_string());
        assert!(site.status.is_terminal());
    }

    #[test]
    fn test_site_lifecycle_to_failed() {
        let site = pending_site()
            .start_generation()
            .unwrap()
            .fail("upstream timeout")
            .unwrap();

        assert_eq!(site.status, SiteStatus::Failed);
        assert_eq!(site.error_message(), Some("upstream timeout"));
        assert!(site.content.is_none());
        assert!(site.cloud_url.is_none());
        assert_eq!(site.seo_score, 0);
    }

    #[test]
    fn test_pending_site_cannot_skip_generating() {
        let err = pending_site().deploy(deployment()).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidStateTransition {
                from: SiteStatus::Pending,
                to: SiteStatus::Deployed,
            }
        );

        assert!(pending_site().fail("boom").is_err());
    }

    #[test]
    fn test_terminal_sites_never_move_again() {
        let deployed = pending_site()
            .start_generation()
            .unwrap()
            .deploy(deployment())
            .unwrap();
        assert!(deployed.clone().start_generation().is_err());
        assert!(deployed.clone().fail("late failure").is_err());

        let failed = pending_site()
            .start_generation()
            .unwrap()
            .fail("boom")
            .unwrap();
        assert!(failed.clone().start_generation().is_err());
        assert!(failed.deploy(deployment()).is_err());
    }

    #[test]
    fn test_status_string_round_trip() {
        for status in [
            SiteStatus::Pending,
            SiteStatus::Generating,
            SiteStatus::Deployed,
            SiteStatus::Failed,
        ] {
            assert_eq!(status.to_string().parse::<SiteStatus>().unwrap(), status);
        }
        assert!("archived".parse::<SiteStatus>().is_err());
        assert_eq!(
            serde_json::to_value(SiteStatus::Generating).unwrap(),
            json!("generating")
        );
    }

    #[test]
    fn test_derive_domain_from_keyword_and_time() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 9, 5, 7).unwrap();

        assert_eq!(
            derive_domain("best coffee beans", None, now),
            "best-coffee-beans-090507.auto-seo.app"
        );
        assert_eq!(
            derive_domain("best coffee beans", Some("coffee.example.com"), now),
            "coffee.example.com"
        );
        assert_eq!(
            derive_domain("best coffee beans", Some("  "), now),
            "best-coffee-beans-090507.auto-seo.app"
        );
    }

    #[test]
    fn test_new_site_title_falls_back_to_keyword() {
        let now = Utc::now();
        let mut params = GenerationParams::for_keyword("garden tools");

        let site = NewSite::from_params(&params, now);
        assert_eq!(site.title, "garden tools");
        assert_eq!(site.cloud_provider, "aws");
        assert!(!site.domain.is_empty());

        params.title = Some(String::new());
        assert_eq!(NewSite::from_params(&params, now).title, "garden tools");

        params.title = Some("  ".to_string());
        assert_eq!(NewSite::from_params(&params, now).title, "  ");

        params.title = Some("The Garden Shed".to_string());
        params.cloud_provider = "gcp".to_string();
        let site = NewSite::from_params(&params, now);
        assert_eq!(site.title, "The Garden Shed");
        assert_eq!(site.cloud_provider, "gcp");
    }
}
