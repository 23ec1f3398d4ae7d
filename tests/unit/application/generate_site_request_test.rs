// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use autoseo::application::dto::generate_site_request::GenerateSiteRequestDto;
    use autoseo::domain::models::generation_job::GenerationParams;
    use serde_json::json;
    use validator::Validate;

    #[test]
    fn test_defaults_applied_on_deserialize() {
        let dto: GenerateSiteRequestDto =
            serde_json::from_value(json!({ "keyword": "home brewing" })).unwrap();

        assert_eq!(dto.language, "en");
        assert_eq!(dto.tone, "professional");
        assert_eq!(dto.word_count, 1500);
        assert!(dto.include_faq);
        assert_eq!(dto.cloud_provider, "aws");
        assert!(dto.title.is_none());
        assert!(dto.custom_domain.is_none());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_keyword_length_bounds() {
        assert!(GenerateSiteRequestDto::for_keyword("a").validate().is_err());
        assert!(GenerateSiteRequestDto::for_keyword("ab").validate().is_ok());
        assert!(GenerateSiteRequestDto::for_keyword("k".repeat(100))
            .validate()
            .is_ok());
        assert!(GenerateSiteRequestDto::for_keyword("k".repeat(101))
            .validate()
            .is_err());
    }

    #[test]
    fn test_conversion_keeps_every_field() {
        let dto: GenerateSiteRequestDto = serde_json::from_value(json!({
            "keyword": "home brewing",
            "title": "Brew at Home",
            "language": "fr",
            "tone": "casual",
            "word_count": 900,
            "include_faq": false,
            "cloud_provider": "azure",
            "custom_domain": "brew.example.com"
        }))
        .unwrap();

        let params = GenerationParams::from(dto);
        assert_eq!(params.keyword, "home brewing");
        assert_eq!(params.title.as_deref(), Some("Brew at Home"));
        assert_eq!(params.language, "fr");
        assert_eq!(params.tone, "casual");
        assert_eq!(params.word_count, 900);
        assert!(!params.include_faq);
        assert_eq!(params.cloud_provider, "azure");
        assert_eq!(params.custom_domain.as_deref(), Some("brew.example.com"));
    }
}
