//! Illustrative media for exercise names.
//!
//! Names are matched against ordered tables: exact key first, then the first
//! key (in declared order) that contains the name or is contained by it.
//! Ambiguous names therefore resolve to whichever key is declared first.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaAsset {
    BenchPress,
    Squat,
    TricepsRope,
    FrontPulldown,
    Abdominal,
    BicepsCurl,
    Stiff,
    ShoulderPress,
    LateralRaise,
}

impl MediaAsset {
    pub fn key(self) -> &'static str {
        match self {
            MediaAsset::BenchPress => "bench-press",
            MediaAsset::Squat => "squat",
            MediaAsset::TricepsRope => "triceps-corda",
            MediaAsset::FrontPulldown => "puxada-frontal",
            MediaAsset::Abdominal => "abdominal",
            MediaAsset::BicepsCurl => "rosca-direta",
            MediaAsset::Stiff => "stiff",
            MediaAsset::ShoulderPress => "desenvolvimento",
            MediaAsset::LateralRaise => "elevacao-lateral",
        }
    }

    pub fn gif_path(self) -> String {
        format!("/images/exercises/{}.gif", self.key())
    }

    /// Only a subset of assets ships with an animation.
    pub fn animation_path(self) -> Option<String> {
        match self {
            MediaAsset::BenchPress
            | MediaAsset::Squat
            | MediaAsset::TricepsRope
            | MediaAsset::FrontPulldown
            | MediaAsset::Abdominal => Some(format!("assets/exercises/{}.json", self.key())),
            _ => None,
        }
    }
}

pub const DEFAULT_ASSET: MediaAsset = MediaAsset::BenchPress;

/// Ordered name-to-asset table. Order matters for partial matches.
#[derive(Debug, Clone, Copy)]
pub struct MediaTable {
    entries: &'static [(&'static str, MediaAsset)],
    fallback: MediaAsset,
}

impl MediaTable {
    pub const fn new(
        entries: &'static [(&'static str, MediaAsset)],
        fallback: MediaAsset,
    ) -> Self {
        Self { entries, fallback }
    }

    pub fn resolve(&self, exercise_name: &str) -> MediaAsset {
        let name = exercise_name.trim().to_lowercase();

        if let Some((_, asset)) = self.entries.iter().find(|(key, _)| *key == name) {
            debug!(%name, asset = asset.key(), "media.exact_match");
            return *asset;
        }

        // An empty name is contained in every key; treat it as unknown.
        if !name.is_empty()
            && let Some((key, asset)) = self
                .entries
                .iter()
                .find(|(key, _)| name.contains(key) || key.contains(name.as_str()))
        {
            debug!(%name, %key, asset = asset.key(), "media.partial_match");
            return *asset;
        }

        debug!(%name, asset = self.fallback.key(), "media.fallback");
        self.fallback
    }
}

pub static GIF_TABLE: MediaTable = MediaTable::new(
    &[
        ("supino reto com barra", MediaAsset::BenchPress),
        ("supino", MediaAsset::BenchPress),
        ("agachamento", MediaAsset::Squat),
        ("agachamento livre", MediaAsset::Squat),
        ("tríceps corda", MediaAsset::TricepsRope),
        ("tríceps na polia com corda", MediaAsset::TricepsRope),
        ("puxada frontal", MediaAsset::FrontPulldown),
        ("abdominal", MediaAsset::Abdominal),
        ("exercício abdominal completo", MediaAsset::Abdominal),
        ("crucifixo com halteres", MediaAsset::BenchPress),
        ("rosca direta", MediaAsset::BicepsCurl),
        ("stiff", MediaAsset::Stiff),
        ("desenvolvimento com halteres", MediaAsset::ShoulderPress),
        ("elevação lateral", MediaAsset::LateralRaise),
    ],
    DEFAULT_ASSET,
);

pub static ANIMATION_TABLE: MediaTable = MediaTable::new(
    &[
        ("supino reto com barra", MediaAsset::BenchPress),
        ("supino", MediaAsset::BenchPress),
        ("agachamento", MediaAsset::Squat),
        ("agachamento livre", MediaAsset::Squat),
        ("tríceps corda", MediaAsset::TricepsRope),
        ("tríceps na polia com corda", MediaAsset::TricepsRope),
        ("puxada frontal", MediaAsset::FrontPulldown),
        ("abdominal", MediaAsset::Abdominal),
        ("exercício abdominal completo", MediaAsset::Abdominal),
    ],
    DEFAULT_ASSET,
);

pub fn resolve(exercise_name: &str) -> MediaAsset {
    GIF_TABLE.resolve(exercise_name)
}

pub fn resolve_animation(exercise_name: &str) -> MediaAsset {
    ANIMATION_TABLE.resolve(exercise_name)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Supino reto com barra", MediaAsset::BenchPress)]
    #[case("unknown-xyz", MediaAsset::BenchPress)]
    #[case("AGACHAMENTO LIVRE", MediaAsset::Squat)]
    #[case("  Stiff  ", MediaAsset::Stiff)]
    #[case("Rosca direta", MediaAsset::BicepsCurl)]
    #[case("Elevação lateral", MediaAsset::LateralRaise)]
    #[case("TRÍCEPS CORDA", MediaAsset::TricepsRope)]
    fn test_resolve(#[case] name: &str, #[case] expected: MediaAsset) {
        assert_eq!(resolve(name), expected);
    }

    #[test]
    fn test_partial_match_both_directions() {
        // name contains key
        assert_eq!(
            resolve("Exercício tríceps na polia com corda"),
            MediaAsset::TricepsRope
        );
        // key contains name
        assert_eq!(resolve("puxada"), MediaAsset::FrontPulldown);
    }

    #[test]
    fn test_first_declared_key_wins() {
        // "agachamento" is declared before "agachamento livre"
        assert_eq!(resolve("agachamento livre com pausa"), MediaAsset::Squat);
        // "supino" shadows nothing more specific for inclined variations
        assert_eq!(resolve("Supino inclinado"), MediaAsset::BenchPress);

        static SHADOWED: MediaTable = MediaTable::new(
            &[
                ("rosca", MediaAsset::BicepsCurl),
                ("rosca direta", MediaAsset::Abdominal),
            ],
            DEFAULT_ASSET,
        );
        assert_eq!(SHADOWED.resolve("rosca direta"), MediaAsset::Abdominal);
        assert_eq!(SHADOWED.resolve("rosca direta na polia"), MediaAsset::BicepsCurl);
    }

    #[test]
    fn test_blank_name_uses_fallback() {
        assert_eq!(resolve("   "), DEFAULT_ASSET);
    }

    #[test]
    fn test_animation_table_is_smaller() {
        assert_eq!(resolve("Stiff"), MediaAsset::Stiff);
        assert_eq!(resolve_animation("Stiff"), DEFAULT_ASSET);
        assert_eq!(resolve_animation("Puxada frontal"), MediaAsset::FrontPulldown);
    }

    #[test]
    fn test_asset_paths() {
        assert_eq!(
            MediaAsset::LateralRaise.gif_path(),
            "/images/exercises/elevacao-lateral.gif"
        );
        assert_eq!(
            MediaAsset::Squat.animation_path().as_deref(),
            Some("assets/exercises/squat.json")
        );
        assert_eq!(MediaAsset::Stiff.animation_path(), None);
    }
}
