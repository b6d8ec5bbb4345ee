use crate::domain::{
    analysis::{
        entities::{
            AnalysisVerdict, BarcodeScanResult, IngredientMatch, VerdictSource, VerdictTier,
        },
        helpers::{
            self, MSG_MODERATE, MSG_NO_DATA, MSG_SAFE, RED_WARNINGS, YELLOW_WARNINGS,
            red_verdict_message,
        },
        ports::{FoodScanService, ProductDatabasePort, VisionClassifierPort},
        value_objects::{AnalyzeTextInput, ClassifyImageInput, ScanBarcodeInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    knowledge::{IngredientRecord, KnowledgeBase},
    rate_limit::ports::RateLimitStore,
};

/// Severity substituted for a scan term without a knowledge-base
/// record.
const DEFAULT_HIGH_SEVERITY: u8 = 8;
const DEFAULT_MODERATE_SEVERITY: u8 = 5;

const MAX_ALTERNATIVES: usize = 5;

/// Classify raw ingredient text against the knowledge base.
///
/// Pure and deterministic: lowercase normalization, a word-boundary
/// scan of the high-risk list (with alias fallback per term), and only
/// if that finds nothing, the same scan over the moderate-risk list.
/// A single high-risk hit forces RED no matter how many moderate terms
/// are present. Never fails; empty input degrades to UNKNOWN.
pub fn analyze_ingredients(kb: &KnowledgeBase, text: &str) -> AnalysisVerdict {
    if text.trim().is_empty() {
        return AnalysisVerdict {
            status: VerdictTier::Unknown,
            found: Vec::new(),
            message: MSG_NO_DATA.to_string(),
            score: 0,
            matches: Vec::new(),
            alternatives: None,
            warnings: None,
        };
    }

    let normalized = text.to_lowercase();

    let matches = scan_term_list(kb, &normalized, kb.high_risk_terms(), DEFAULT_HIGH_SEVERITY);
    if !matches.is_empty() {
        let alternatives = pool_alternatives(&matches);
        return AnalysisVerdict {
            status: VerdictTier::Red,
            found: matched_names(&matches),
            message: red_verdict_message(matches.len()),
            score: clamp_score(&matches),
            matches,
            alternatives,
            warnings: Some(RED_WARNINGS.iter().map(|w| w.to_string()).collect()),
        };
    }

    let matches = scan_term_list(
        kb,
        &normalized,
        kb.moderate_risk_terms(),
        DEFAULT_MODERATE_SEVERITY,
    );
    if !matches.is_empty() {
        return AnalysisVerdict {
            status: VerdictTier::Yellow,
            found: matched_names(&matches),
            message: MSG_MODERATE.to_string(),
            score: clamp_score(&matches),
            matches,
            alternatives: None,
            warnings: Some(YELLOW_WARNINGS.iter().map(|w| w.to_string()).collect()),
        };
    }

    AnalysisVerdict {
        status: VerdictTier::Green,
        found: Vec::new(),
        message: MSG_SAFE.to_string(),
        score: 0,
        matches: Vec::new(),
        alternatives: None,
        warnings: None,
    }
}

/// One pass over an ordered term list. Matches are reported in list
/// order and deduplicated by canonical display name, so a term and one
/// of its aliases never contribute two entries.
fn scan_term_list(
    kb: &KnowledgeBase,
    normalized_text: &str,
    terms: &[&str],
    default_severity: u8,
) -> Vec<IngredientMatch> {
    let mut matches: Vec<IngredientMatch> = Vec::new();

    for term in terms {
        let Some(surface) = helpers::find_surface_match(kb, normalized_text, term) else {
            continue;
        };

        let record = kb.lookup_by_key(term).or_else(|| kb.lookup_by_alias(term));
        let name = record
            .map(|r| r.display_name.clone())
            .unwrap_or_else(|| term.to_string());

        if matches.iter().any(|m| m.name == name) {
            continue;
        }

        matches.push(IngredientMatch {
            name,
            original_text: surface,
            severity: record.map(|r| r.severity).unwrap_or(default_severity),
            details: record.cloned(),
        });
    }

    matches
}

fn matched_names(matches: &[IngredientMatch]) -> Vec<String> {
    matches.iter().map(|m| m.name.clone()).collect()
}

fn clamp_score(matches: &[IngredientMatch]) -> u8 {
    let total: u32 = matches.iter().map(|m| u32::from(m.severity)).sum();
    total.min(100) as u8
}

/// Union of the matched records' substitute suggestions, first-seen
/// order, capped at five. `None` (not an empty list) when nothing is
/// suggested.
fn pool_alternatives(matches: &[IngredientMatch]) -> Option<Vec<String>> {
    let mut pooled: Vec<String> = Vec::new();
    for m in matches {
        let Some(details) = &m.details else { continue };
        for alternative in &details.alternatives {
            if pooled.len() == MAX_ALTERNATIVES {
                break;
            }
            if !pooled.contains(alternative) {
                pooled.push(alternative.clone());
            }
        }
    }

    if pooled.is_empty() { None } else { Some(pooled) }
}

/// Detail record for a name surfaced in a verdict: canonical key first,
/// then a linear alias scan. Total over arbitrary caller strings.
pub fn lookup_ingredient_details(kb: &KnowledgeBase, name: &str) -> Option<IngredientRecord> {
    let normalized = name.to_lowercase();
    kb.lookup_by_key(&normalized)
        .or_else(|| kb.lookup_by_alias(&normalized))
        .cloned()
}

const INGREDIENT_LIST_INDICATORS: &[&str] = &[
    "składniki:",
    "ingredients:",
    "skład:",
    "zawiera:",
    "mąka",
    "cukier",
    "sól",
    "woda",
    "olej",
    "%",
];

/// Advisory heuristic: does this text plausibly come from an
/// ingredients list? Lets callers decide how much to trust an OCR or
/// vision result; never enforced inside classification.
pub fn looks_like_ingredients_list(text: &str) -> bool {
    let normalized = text.to_lowercase();
    INGREDIENT_LIST_INDICATORS
        .iter()
        .any(|indicator| normalized.contains(indicator))
}

impl<PD, VC, RL> FoodScanService for Service<PD, VC, RL>
where
    PD: ProductDatabasePort,
    VC: VisionClassifierPort,
    RL: RateLimitStore,
{
    async fn analyze_text(&self, input: AnalyzeTextInput) -> Result<AnalysisVerdict, CoreError> {
        let verdict = analyze_ingredients(self.knowledge_base, &input.ingredients_text);
        tracing::debug!(status = ?verdict.status, score = verdict.score, "text analysis done");
        Ok(verdict)
    }

    async fn scan_barcode(&self, input: ScanBarcodeInput) -> Result<BarcodeScanResult, CoreError> {
        let product = self
            .product_db
            .fetch_product(input.barcode.clone())
            .await?
            .ok_or(CoreError::NotFound)?;

        let verdict = analyze_ingredients(self.knowledge_base, &product.ingredients_text);
        tracing::debug!(
            barcode = %input.barcode,
            status = ?verdict.status,
            "barcode scan classified"
        );

        Ok(BarcodeScanResult {
            product_name: product.name,
            product_brand: product.brand,
            source: VerdictSource::Db,
            verdict,
        })
    }

    async fn classify_image(&self, input: ClassifyImageInput) -> Result<AnalysisVerdict, CoreError> {
        self.vision_limiter.check(&input.caller_key)?;

        let verdict = self
            .vision_classifier
            .classify_label(input.image_data)
            .await?;
        tracing::debug!(status = ?verdict.status, "vision classification done");
        Ok(verdict)
    }

    fn lookup_ingredient(&self, name: String) -> Option<IngredientRecord> {
        lookup_ingredient_details(self.knowledge_base, &name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        analysis::entities::ProductInfo,
        common::RateLimitConfig,
        rate_limit::services::FixedWindowLimiter,
    };
    use crate::infrastructure::rate_limit::InMemoryRateLimitStore;

    fn kb() -> &'static KnowledgeBase {
        KnowledgeBase::shared()
    }

    #[test]
    fn empty_input_degrades_to_unknown() {
        for input in ["", "   ", "\n\t"] {
            let verdict = analyze_ingredients(kb(), input);
            assert_eq!(verdict.status, VerdictTier::Unknown);
            assert_eq!(verdict.score, 0);
            assert!(verdict.matches.is_empty());
            assert!(verdict.found.is_empty());
            assert_eq!(verdict.message, MSG_NO_DATA);
        }
    }

    #[test]
    fn high_risk_match_forces_red() {
        let verdict = analyze_ingredients(kb(), "woda, czosnek, sól");
        assert_eq!(verdict.status, VerdictTier::Red);
        assert_eq!(verdict.found, vec!["Czosnek".to_string()]);
        assert_eq!(verdict.score, 10);
        assert_eq!(verdict.message, "Wykryto 1 silny wyzwalacz FODMAP.");
        assert_eq!(
            verdict.warnings.as_deref().map(|w| w.len()),
            Some(RED_WARNINGS.len())
        );
    }

    #[test]
    fn red_dominates_yellow_regardless_of_counts() {
        // One high-risk trigger among several moderate-risk ones.
        let verdict = analyze_ingredients(kb(), "mleko, śmietana, aromaty, serwatka, cebula");
        assert_eq!(verdict.status, VerdictTier::Red);
        assert_eq!(verdict.found, vec!["Cebula".to_string()]);
    }

    #[test]
    fn moderate_only_input_is_yellow() {
        let verdict = analyze_ingredients(kb(), "mleko, cukier, aromat waniliowy");
        assert_eq!(verdict.status, VerdictTier::Yellow);
        assert_eq!(
            verdict.found,
            vec!["Mleko".to_string(), "Aromaty".to_string()]
        );
        // Mleko 7 + Aromaty 6.
        assert_eq!(verdict.score, 13);
        assert_eq!(verdict.message, MSG_MODERATE);
        assert!(verdict.alternatives.is_none());
        assert_eq!(
            verdict.warnings.as_deref().map(|w| w.len()),
            Some(YELLOW_WARNINGS.len())
        );
    }

    #[test]
    fn unmatched_input_is_green_with_zero_score() {
        let verdict = analyze_ingredients(kb(), "woda, sól, mąka ryżowa, olej słonecznikowy");
        assert_eq!(verdict.status, VerdictTier::Green);
        assert_eq!(verdict.score, 0);
        assert!(verdict.matches.is_empty());
        assert!(verdict.alternatives.is_none());
        assert!(verdict.warnings.is_none());
        assert_eq!(verdict.message, MSG_SAFE);
    }

    #[test]
    fn analysis_is_deterministic() {
        let input = "mąka pszenna, cebula, miód, mleko w proszku";
        let first = analyze_ingredients(kb(), input);
        let second = analyze_ingredients(kb(), input);
        assert_eq!(first, second);
    }

    #[test]
    fn word_boundary_prevents_false_positives() {
        // "por" must not fire inside "eksport", nor anything inside
        // "słonecznikowy".
        let verdict = analyze_ingredients(kb(), "eksport, olej słonecznikowy");
        assert_eq!(verdict.status, VerdictTier::Green);
    }

    #[test]
    fn alias_resolves_to_canonical_record() {
        // No literal "cebula" in the input, only an alias surface form.
        let verdict = analyze_ingredients(kb(), "mąka ryżowa, proszek cebulowy, sól");
        assert_eq!(verdict.status, VerdictTier::Red);
        assert_eq!(verdict.found, vec!["Cebula".to_string()]);
        assert_eq!(verdict.matches[0].severity, 10);
        assert_eq!(verdict.matches[0].original_text, "cebulowy");
    }

    #[test]
    fn term_and_alias_deduplicate_to_one_entry() {
        // "cebula" and "cebulowy" are both scan terms resolving to the
        // same canonical record.
        let verdict = analyze_ingredients(kb(), "cebula, ekstrakt cebulowy");
        assert_eq!(verdict.status, VerdictTier::Red);
        assert_eq!(verdict.found, vec!["Cebula".to_string()]);
        assert_eq!(verdict.matches.len(), 1);
        assert_eq!(verdict.score, 10);
    }

    #[test]
    fn match_order_follows_term_list_not_input_order() {
        // Input mentions miód before cebula; the term list declares the
        // cebula family first.
        let verdict = analyze_ingredients(kb(), "miód, cebula");
        assert_eq!(
            verdict.found,
            vec!["Cebula".to_string(), "Miód".to_string()]
        );
    }

    #[test]
    fn score_is_clamped_to_one_hundred() {
        let verdict = analyze_ingredients(
            kb(),
            "cebula, czosnek, inulina, pszenica, fasola, soja, sorbitol, ksylitol, \
             erytrytol, miód, izoglukoza, jabłko, soczewica, mannitol, maltitol",
        );
        assert_eq!(verdict.status, VerdictTier::Red);
        assert_eq!(verdict.score, 100);
    }

    #[test]
    fn alternatives_are_pooled_deduplicated_and_capped() {
        let verdict = analyze_ingredients(kb(), "cebula, czosnek, miód");
        let alternatives = verdict.alternatives.expect("red matches carry alternatives");
        assert_eq!(alternatives.len(), 5);
        assert_eq!(alternatives[0], "Zielona część pora (tylko zielone pióra)");
        let unique: std::collections::HashSet<_> = alternatives.iter().collect();
        assert_eq!(unique.len(), alternatives.len());
    }

    #[test]
    fn alternatives_are_omitted_when_no_record_suggests_any() {
        // "szalotka" is a scan term without a knowledge-base record.
        let verdict = analyze_ingredients(kb(), "woda, szalotka");
        assert_eq!(verdict.status, VerdictTier::Red);
        assert_eq!(verdict.found, vec!["szalotka".to_string()]);
        assert_eq!(verdict.matches[0].severity, DEFAULT_HIGH_SEVERITY);
        assert!(verdict.matches[0].details.is_none());
        assert!(verdict.alternatives.is_none());
    }

    #[test]
    fn sample_label_with_onion_powder_is_red() {
        let verdict = analyze_ingredients(kb(), "mąka pszenna, woda, sól, cebula w proszku");
        assert_eq!(verdict.status, VerdictTier::Red);
        assert!(verdict.found.contains(&"Cebula".to_string()));
    }

    #[test]
    fn verdict_lookup_accepts_keys_and_aliases() {
        let record = lookup_ingredient_details(kb(), "Cebula").expect("canonical key");
        assert_eq!(record.key, "cebula");

        let record = lookup_ingredient_details(kb(), "PROSZEK CZOSNKOWY").expect("alias");
        assert_eq!(record.key, "czosnek");

        assert!(lookup_ingredient_details(kb(), "coś zupełnie innego").is_none());
        assert!(lookup_ingredient_details(kb(), "").is_none());
    }

    #[test]
    fn ingredient_list_heuristic_spots_label_tokens() {
        assert!(looks_like_ingredients_list("Składniki: mąka, woda"));
        assert!(looks_like_ingredients_list("ingredients: rice flour"));
        assert!(looks_like_ingredients_list("sok 100%"));
        assert!(!looks_like_ingredients_list("zwykłe zdanie bez etykiety"));
    }

    // Service-level orchestration over stub ports.

    struct StubProductDb {
        product: Option<ProductInfo>,
    }

    impl ProductDatabasePort for StubProductDb {
        async fn fetch_product(&self, _barcode: String) -> Result<Option<ProductInfo>, CoreError> {
            Ok(self.product.clone())
        }
    }

    struct StubVision {
        verdict: Result<AnalysisVerdict, CoreError>,
    }

    impl VisionClassifierPort for StubVision {
        async fn classify_label(&self, _image_data: Vec<u8>) -> Result<AnalysisVerdict, CoreError> {
            self.verdict.clone()
        }
    }

    fn service(
        product: Option<ProductInfo>,
        vision: Result<AnalysisVerdict, CoreError>,
        max_requests: u32,
    ) -> Service<StubProductDb, StubVision, InMemoryRateLimitStore> {
        Service::new(
            kb(),
            StubProductDb { product },
            StubVision { verdict: vision },
            FixedWindowLimiter::new(
                InMemoryRateLimitStore::new(),
                &RateLimitConfig {
                    max_requests,
                    window_secs: 3600,
                },
            ),
        )
    }

    fn ai_verdict() -> AnalysisVerdict {
        AnalysisVerdict {
            status: VerdictTier::Red,
            found: vec!["czosnek".to_string()],
            message: "Wykryto czosnek na etykiecie.".to_string(),
            score: 80,
            matches: Vec::new(),
            alternatives: None,
            warnings: None,
        }
    }

    #[tokio::test]
    async fn scan_barcode_classifies_product_ingredients() {
        let svc = service(
            Some(ProductInfo {
                barcode: "5900000000000".to_string(),
                name: "Zupa instant".to_string(),
                brand: "Testowa".to_string(),
                ingredients_text: "makaron, cebula, czosnek".to_string(),
            }),
            Ok(ai_verdict()),
            20,
        );

        let result = svc
            .scan_barcode(ScanBarcodeInput {
                barcode: "5900000000000".to_string(),
            })
            .await
            .expect("product exists");

        assert_eq!(result.product_name, "Zupa instant");
        assert_eq!(result.source, VerdictSource::Db);
        assert_eq!(result.verdict.status, VerdictTier::Red);
        assert_eq!(
            result.verdict.found,
            vec!["Cebula".to_string(), "Czosnek".to_string()]
        );
    }

    #[tokio::test]
    async fn scan_barcode_maps_missing_product_to_not_found() {
        let svc = service(None, Ok(ai_verdict()), 20);
        let err = svc
            .scan_barcode(ScanBarcodeInput {
                barcode: "0000000000000".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn classify_image_passes_vision_verdict_through() {
        let svc = service(None, Ok(ai_verdict()), 20);
        let verdict = svc
            .classify_image(ClassifyImageInput {
                image_data: vec![0xFF, 0xD8],
                caller_key: "1.2.3.4".to_string(),
            })
            .await
            .expect("vision available");
        assert_eq!(verdict, ai_verdict());
    }

    #[tokio::test]
    async fn classify_image_enforces_the_caller_rate_limit() {
        let svc = service(None, Ok(ai_verdict()), 1);
        let input = ClassifyImageInput {
            image_data: vec![0xFF, 0xD8],
            caller_key: "1.2.3.4".to_string(),
        };

        svc.classify_image(input.clone()).await.expect("first call");
        let err = svc.classify_image(input).await.unwrap_err();
        assert!(matches!(err, CoreError::RateLimited { .. }));
    }

    #[tokio::test]
    async fn classify_image_surfaces_collaborator_failures() {
        let svc = service(
            None,
            Err(CoreError::ExternalService("timeout".to_string())),
            20,
        );
        let err = svc
            .classify_image(ClassifyImageInput {
                image_data: vec![0xFF, 0xD8],
                caller_key: "1.2.3.4".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::ExternalService("timeout".to_string()));
    }

    #[tokio::test]
    async fn service_lookup_mirrors_verdict_lookup() {
        let svc = service(None, Ok(ai_verdict()), 20);
        let record = svc
            .lookup_ingredient("proszek cebulowy".to_string())
            .expect("alias resolves");
        assert_eq!(record.display_name, "Cebula");
        assert!(svc.lookup_ingredient("brak".to_string()).is_none());
    }
}
