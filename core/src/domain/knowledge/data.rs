//! Curated FODMAP reference data: detailed ingredient records plus the
//! two ordered scan term lists. Polish surface forms, since product
//! labels in the target market are Polish (English Open Food Facts
//! entries still match the shared aliases such as "hfcs" or "xylitol").

use super::entities::{FodmapCategory, IngredientRecord, RiskTier};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn ingredient_records() -> Vec<IngredientRecord> {
    vec![
        // Fruktany
        IngredientRecord {
            key: "cebula".into(),
            display_name: "Cebula".into(),
            severity: 10,
            category: FodmapCategory::Fructans,
            fodmap_type: "Fruktany (Fructans)".into(),
            rationale: "Zawiera bardzo wysokie stężenie fruktozanów, które fermentują w jelitach"
                .into(),
            symptoms: strings(&["Wzdęcia", "Bóle brzucha", "Gazy", "Biegunka"]),
            found_in: strings(&["Sosy gotowe", "Przyprawy", "Zupy instant", "Buliony"]),
            risk_tier: RiskTier::High,
            safe_serving: Some("BRAK - unikaj całkowicie".into()),
            alternatives: strings(&[
                "Zielona część pora (tylko zielone pióra)",
                "Oliwa infuzowana cebulą (olejek bez cząstek)",
                "Szczypiorek w małych ilościach",
            ]),
            aliases: strings(&[
                "cebula",
                "cebuli",
                "cebulę",
                "cebulowy",
                "cebulowa",
                "proszek cebulowy",
                "ekstrakt cebulowy",
            ]),
        },
        IngredientRecord {
            key: "czosnek".into(),
            display_name: "Czosnek".into(),
            severity: 10,
            category: FodmapCategory::Fructans,
            fodmap_type: "Fruktany (Fructans)".into(),
            rationale: "Najsilniejszy wyzwalacz FODMAP - ekstremalnie wysoka zawartość fruktozanów"
                .into(),
            symptoms: strings(&["Silne wzdęcia", "Bóle brzucha", "Kolka jelitowa", "Gazy"]),
            found_in: strings(&["Sosy", "Marynaty", "Przyprawy gotowe", "Masło czosnkowe"]),
            risk_tier: RiskTier::High,
            safe_serving: Some("BRAK - unikaj całkowicie".into()),
            alternatives: strings(&[
                "Oliwa czosnkowa (olejek, NIE olej z kawałkami)",
                "Hing/Asafoetida (indyjska przyprawa)",
                "Infuzja oliwy (podgrzej oliwę z czosnkiem, wyrzuć ząbki)",
            ]),
            aliases: strings(&[
                "czosnek",
                "czosnku",
                "czosnkowy",
                "czosnkowa",
                "proszek czosnkowy",
                "granulat czosnkowy",
            ]),
        },
        IngredientRecord {
            key: "inulina".into(),
            display_name: "Inulina".into(),
            severity: 10,
            category: FodmapCategory::Fructans,
            fodmap_type: "Fruktany (Fructans)".into(),
            rationale: "Rozpuszczalny błonnik z cykorii - celowo dodawany, silnie fermentujący"
                .into(),
            symptoms: strings(&["Ekstremalne wzdęcia", "Gazy", "Dyskomfort brzucha"]),
            found_in: strings(&[
                "Batony fit",
                "Jogurty proteinowe",
                "Suplementy błonnika",
                "Lody light",
            ]),
            risk_tier: RiskTier::High,
            safe_serving: Some("BRAK".into()),
            alternatives: strings(&[
                "Błonnik z psyllium (łupiny babki jajowatej)",
                "Pektyny",
                "Babka jajowata",
            ]),
            aliases: strings(&[
                "inulina",
                "błonnik z cykorii",
                "korzeń cykorii",
                "ekstrakt z cykorii",
                "fruktooligosacharydy",
                "fos",
            ]),
        },
        IngredientRecord {
            key: "pszenica".into(),
            display_name: "Pszenica".into(),
            severity: 7,
            category: FodmapCategory::Fructans,
            fodmap_type: "Fruktany (Fructans)".into(),
            rationale: "Zawiera fruktany, ale dozwolona w małych ilościach".into(),
            symptoms: strings(&["Wzdęcia (jeśli główny składnik)", "Dyskomfort"]),
            found_in: strings(&["Chleb", "Makaron", "Ciastka", "Pizza"]),
            risk_tier: RiskTier::Moderate,
            safe_serving: Some("Do 2 kromek chleba dziennie".into()),
            alternatives: strings(&[
                "Chleb bezglutenowy",
                "Mąka ryżowa",
                "Mąka gryczana",
                "Orkisz (niektórzy tolerują)",
            ]),
            aliases: strings(&[
                "pszenica",
                "mąka pszenna",
                "pszenny",
                "pszenna",
                "gluten pszenny",
            ]),
        },
        // Galaktany
        IngredientRecord {
            key: "fasola".into(),
            display_name: "Fasola".into(),
            severity: 8,
            category: FodmapCategory::Galactans,
            fodmap_type: "Galaktany (Galactans)".into(),
            rationale: "Wysokie stężenie galakto-oligosacharydów (GOS)".into(),
            symptoms: strings(&["Wzdęcia", "Gazy", "Dyskomfort"]),
            found_in: strings(&["Konserwy", "Zupy", "Dania meksykańskie"]),
            risk_tier: RiskTier::High,
            safe_serving: Some("Fasola z puszki po spłukaniu - max 46g".into()),
            alternatives: strings(&[
                "Tofu (fermentowana soja)",
                "Tempeh",
                "Soczewica z puszki (wypłukana, małe ilości)",
            ]),
            aliases: strings(&["fasola", "fasoli"]),
        },
        IngredientRecord {
            key: "soja".into(),
            display_name: "Soja".into(),
            severity: 7,
            category: FodmapCategory::Galactans,
            fodmap_type: "Galaktany (Galactans)".into(),
            rationale: "Zawiera GOS, ale fermentowane produkty sojowe są OK".into(),
            symptoms: strings(&["Wzdęcia", "Gazy"]),
            found_in: strings(&["Mleko sojowe", "Białko sojowe", "Mąka sojowa"]),
            risk_tier: RiskTier::High,
            safe_serving: Some("Tofu i tempeh są OK (fermentowane)".into()),
            alternatives: strings(&[
                "Mleko migdałowe",
                "Mleko ryżowe",
                "Tofu (OK)",
                "Tempeh (OK)",
            ]),
            aliases: strings(&[
                "soja",
                "sojowe",
                "mąka sojowa",
                "białko sojowe",
                "lecytyna sojowa",
            ]),
        },
        // Poliole
        IngredientRecord {
            key: "sorbitol".into(),
            display_name: "Sorbitol".into(),
            severity: 10,
            category: FodmapCategory::Polyols,
            fodmap_type: "Poliole (Polyols)".into(),
            rationale: "Sztuczny słodzik - nie wchłania się, fermentuje w jelitach".into(),
            symptoms: strings(&["Biegunka", "Wzdęcia", "Bóle brzucha"]),
            found_in: strings(&["Gumy do żucia", "Cukierki bez cukru", "Napoje light"]),
            risk_tier: RiskTier::High,
            safe_serving: Some("BRAK".into()),
            alternatives: strings(&[
                "Cukier trzcinowy",
                "Glukoza",
                "Stewia (czysta)",
                "Syrop klonowy",
            ]),
            aliases: strings(&["sorbitol", "e420", "e-420"]),
        },
        IngredientRecord {
            key: "ksylitol".into(),
            display_name: "Ksylitol".into(),
            severity: 10,
            category: FodmapCategory::Polyols,
            fodmap_type: "Poliole (Polyols)".into(),
            rationale: "Sztuczny słodzik z brzozy - silny efekt przeczyszczający".into(),
            symptoms: strings(&["Biegunka", "Bóle brzucha", "Gazy"]),
            found_in: strings(&["Gumy", "Pasty do zębów", "Lody light", "Suplementy"]),
            risk_tier: RiskTier::High,
            safe_serving: Some("BRAK".into()),
            alternatives: strings(&["Cukier", "Glukoza", "Syrop klonowy", "Stewia"]),
            aliases: strings(&["ksylitol", "e967", "xylitol"]),
        },
        IngredientRecord {
            key: "erytrytol".into(),
            display_name: "Erytrytol".into(),
            severity: 6,
            category: FodmapCategory::Polyols,
            fodmap_type: "Poliole (Polyols)".into(),
            rationale: "Lepiej tolerowany niż inne poliole, ale wciąż ryzykowny".into(),
            symptoms: strings(&["Wzdęcia (w dużych ilościach)", "Dyskomfort"]),
            found_in: strings(&["Słodziki keto", "Lody fit", "Batony proteinowe"]),
            risk_tier: RiskTier::Moderate,
            safe_serving: Some("Do 10g dziennie".into()),
            alternatives: strings(&["Cukier", "Stewia (czysta)", "Syrop klonowy"]),
            aliases: strings(&["erytrytol", "erytrol", "e968"]),
        },
        // Fruktoza
        IngredientRecord {
            key: "miod".into(),
            display_name: "Miód".into(),
            severity: 9,
            category: FodmapCategory::Fructose,
            fodmap_type: "Fruktoza (nadmiar)".into(),
            rationale: "Wysoka zawartość wolnej fruktozy przekraczającej glukozę".into(),
            symptoms: strings(&["Wzdęcia", "Biegunka", "Dyskomfort"]),
            found_in: strings(&["Słodycze", "Granole", "Dressingi", "Sosy BBQ"]),
            risk_tier: RiskTier::High,
            safe_serving: Some("Max 1 łyżeczka (7g)".into()),
            alternatives: strings(&["Syrop klonowy (czysty)", "Cukier trzcinowy", "Glukoza"]),
            aliases: strings(&["miód", "miod", "miodowy"]),
        },
        IngredientRecord {
            key: "syrop glukozowo-fruktozowy".into(),
            display_name: "Syrop glukozowo-fruktozowy".into(),
            severity: 10,
            category: FodmapCategory::Fructose,
            fodmap_type: "Fruktoza w nadmiarze".into(),
            rationale: "Wysoka zawartość wolnej fruktozy - główny wróg IBS".into(),
            symptoms: strings(&["Silne wzdęcia", "Biegunka", "Bóle"]),
            found_in: strings(&[
                "Napoje gazowane",
                "Słodycze",
                "Ketchupy",
                "Jogurty owocowe",
            ]),
            risk_tier: RiskTier::High,
            safe_serving: Some("BRAK".into()),
            alternatives: strings(&["Cukier biały", "Glukoza", "Syrop klonowy"]),
            aliases: strings(&[
                "syrop glukozowo-fruktozowy",
                "hfcs",
                "syrop kukurydziany wysokofruktozowy",
                "syrop fruktozowy",
                "izoglukoza",
            ]),
        },
        // Laktoza
        IngredientRecord {
            key: "mleko".into(),
            display_name: "Mleko".into(),
            severity: 7,
            category: FodmapCategory::Lactose,
            fodmap_type: "Laktoza (Lactose)".into(),
            rationale: "Cukier mleczny - wymaga enzymu laktazy do trawienia".into(),
            symptoms: strings(&["Wzdęcia", "Biegunka", "Gazy", "Kolka"]),
            found_in: strings(&["Jogurty", "Desery", "Sosy śmietanowe", "Kakao"]),
            risk_tier: RiskTier::Moderate,
            safe_serving: Some("Bezlaktozowe OK, normalne max 125ml".into()),
            alternatives: strings(&[
                "Mleko bez laktozy",
                "Mleko migdałowe",
                "Mleko ryżowe",
                "Mleko kokosowe",
            ]),
            aliases: strings(&["mleko", "mleko w proszku", "laktoza"]),
        },
        // Owoce high-FODMAP
        IngredientRecord {
            key: "jablko".into(),
            display_name: "Jabłko".into(),
            severity: 8,
            category: FodmapCategory::Fructose,
            fodmap_type: "Fruktoza i sorbitol".into(),
            rationale: "Zawiera zarówno nadmiar fruktozy jak i sorbitol".into(),
            symptoms: strings(&["Wzdęcia", "Dyskomfort", "Gazy"]),
            found_in: strings(&["Soki", "Kompoty", "Musy", "Ciastka owocowe"]),
            risk_tier: RiskTier::High,
            safe_serving: Some("Max 20g (1/4 małego jabłka)".into()),
            alternatives: strings(&["Jagody", "Truskawki", "Pomarańcze", "Kiwi"]),
            aliases: strings(&[
                "jablko",
                "jabłko",
                "jabłkowy",
                "sok jabłkowy",
                "koncentrat jabłkowy",
                "jabłka",
            ]),
        },
        // Aromaty i ukryte składniki
        IngredientRecord {
            key: "aromaty".into(),
            display_name: "Aromaty".into(),
            severity: 6,
            category: FodmapCategory::Other,
            fodmap_type: "Niezidentyfikowane (może zawierać FODMAP)".into(),
            rationale: "Ogólne określenie - może ukrywać cebulę, czosnek lub inne FODMAP".into(),
            symptoms: strings(&["Zmienne - zależnie od ukrytych składników"]),
            found_in: strings(&["Chipsy", "Zupki", "Sosy", "Przyprawy"]),
            risk_tier: RiskTier::Moderate,
            safe_serving: Some("Unikaj jeśli możliwe".into()),
            alternatives: strings(&[
                "Produkty z wyszczególnionymi przyprawami",
                "Naturalne zioła i przyprawy",
            ]),
            aliases: strings(&[
                "aromaty",
                "aromat",
                "naturalne aromaty",
                "aromaty naturalne",
                "substancje aromatyzujące",
            ]),
        },
    ]
}

/// Ordered high-risk scan terms. A single word-boundary hit on any of
/// these forces a RED verdict. Order here is the order matches are
/// reported in.
pub(crate) const HIGH_RISK_TERMS: &[&str] = &[
    // Fruktany - warzywa
    "cebula",
    "cebuli",
    "cebulę",
    "cebulowy",
    "cebulowa",
    "proszek cebulowy",
    "czosnek",
    "czosnku",
    "czosnkowy",
    "czosnkowa",
    "proszek czosnkowy",
    "granulat czosnkowy",
    "por",
    "pora",
    "szalotka",
    "szalotki",
    // Fruktany - dodatki
    "inulina",
    "błonnik z cykorii",
    "korzeń cykorii",
    "ekstrakt z cykorii",
    "fruktooligosacharydy",
    "fos",
    "oligofruktoza",
    "korzen topinamburu",
    "topinambur",
    // Fruktany - zboża
    "pszenica",
    "mąka pszenna",
    "gluten pszenny",
    // Galaktany - strączki
    "fasola",
    "fasoli",
    "fasolka",
    "soczewica",
    "ciecierzyca",
    "groch",
    "groszek",
    "soja",
    "ziarno soi",
    "mąka sojowa",
    "białko sojowe",
    // Poliole - słodziki
    "sorbitol",
    "e420",
    "mannitol",
    "e421",
    "ksylitol",
    "xylitol",
    "e967",
    "maltitol",
    "e965",
    "izomalt",
    "e953",
    "erytrytol",
    "erytrol",
    "e968",
    // Fruktoza w nadmiarze
    "syrop glukozowo-fruktozowy",
    "syrop fruktozowy",
    "syrop kukurydziany wysokofruktozowy",
    "hfcs",
    "izoglukoza",
    "fruktoza",
    "miód",
    "miod",
    "syrop z agawy",
    "nektar z agawy",
    "zagęszczony sok owocowy",
    // Owoce high-FODMAP
    "jabłko",
    "jabłkowy",
    "sok jabłkowy",
    "koncentrat jabłkowy",
    "gruszka",
    "gruszkowy",
    "mango",
    "brzoskwinia",
    "morela",
    "śliwka",
    "wiśnia",
    "czereśnia",
    "arbuz",
    "jeżyny",
    "suszone owoce",
    "daktyle",
    "rodzynki",
    "figi",
    // Warzywa high-FODMAP
    "kalafior",
    "grzyby",
    "pieczarki",
    "szparagi",
    "brokuł",
    "brukselka",
    "buraki",
    // Orzechy high-FODMAP
    "pistacje",
    "nerkowce",
    "nerkowiec",
];

/// Ordered moderate-risk scan terms, consulted only when nothing on the
/// high-risk list matched.
pub(crate) const MODERATE_RISK_TERMS: &[&str] = &[
    // Zboża
    "żyto",
    "żytni",
    "mąka żytnia",
    "jęczmień",
    "jęczmienny",
    "słód jęczmienny",
    "orkisz",
    "orkiszowy",
    // Laktoza
    "mleko",
    "mleko w proszku",
    "śmietana",
    "śmietanka",
    "maślanka",
    "serwatka",
    "laktoza",
    // Ukryte składniki
    "aromaty",
    "aromat",
    "przyprawy",
    "mieszanka przypraw",
    "naturalne aromaty",
    "substancje aromatyzujące",
    "błonnik roślinny",
    "ekstrakt drożdżowy",
    // Warzywa
    "kukurydza",
    "kukurydziany",
    "dynia",
    "dyniowy",
    "awokado",
    // Owoce
    "banan",
    "wiśnie",
    "kiwi",
];
