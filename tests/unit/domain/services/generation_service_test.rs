// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use autoseo::domain::models::generation_job::GenerationParams;
    use autoseo::domain::services::generation_service::{
        build_content_request, deployment_url, GenerationOptions,
    };

    #[test]
    fn test_prompt_describes_requested_content() {
        let mut params = GenerationParams::for_keyword("vegan recipes");
        params.language = "de".to_string();
        params.tone = "friendly".to_string();
        params.word_count = 800;

        let request = build_content_request(&params, "gpt-4o-mini", 0.7);

        assert!(request.system_prompt.contains("vegan recipes"));
        assert!(request.system_prompt.contains("'de'"));
        assert!(request.system_prompt.contains("friendly"));
        assert!(request.system_prompt.contains("800 words"));
        assert!(request.system_prompt.contains("FAQ"));
        assert!(request.user_prompt.contains("vegan recipes"));
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.temperature, 0.7);
    }

    #[test]
    fn test_prompt_omits_faq_when_not_requested() {
        let mut params = GenerationParams::for_keyword("vegan recipes");
        params.include_faq = false;

        let request = build_content_request(&params, "gpt-4o-mini", 0.7);

        assert!(!request.system_prompt.contains("FAQ"));
        assert!(!request.user_prompt.contains("FAQ"));
    }

    #[test]
    fn test_deployment_url_uses_site_id() {
        assert_eq!(
            deployment_url("https://demo.autoseo.app", 42),
            "https://demo.autoseo.app/site/42"
        );
        assert_eq!(
            deployment_url("https://demo.autoseo.app/", 7),
            "https://demo.autoseo.app/site/7"
        );
    }

    #[test]
    fn test_default_options() {
        let options = GenerationOptions::default();
        assert_eq!(options.seo_score, 85);
        assert_eq!(options.deploy_base_url, "https://demo.autoseo.app");
    }
}
