//! Built-in exercise catalog.
//!
//! Every exercise the local assembler can prescribe is listed here with its
//! target muscle, three substitutes and its default volume.

use crate::models::common::Exercise;
use crate::services::profile::ExperienceLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseId {
    // Push
    BarbellBenchPress,
    DumbbellFly,
    RopeTricepsPushdown,
    InclinePress,
    FrenchPress,
    PeckDeck,
    // Pull
    FrontLatPulldown,
    SeatedRow,
    BarbellCurl,
    WideGripPulldown,
    HammerCurl,
    Pullover,
    // Legs and shoulders
    BackSquat,
    StiffLegDeadlift,
    DumbbellShoulderPress,
    LateralRaise,
    StandingCalfRaise,
    ReverseFly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub target: &'static str,
    pub alternatives: [&'static str; 3],
    pub series: u32,
    pub repetitions: &'static str,
    pub rest_time: u32,
}

impl CatalogEntry {
    pub fn to_exercise(&self, level: ExperienceLevel) -> Exercise {
        Exercise {
            name: self.name.to_string(),
            target: self.target.to_string(),
            level: level.label().to_string(),
            alternatives: self.alternatives.iter().map(|a| a.to_string()).collect(),
            series: self.series,
            repetitions: self.repetitions.to_string(),
            rest_time: self.rest_time,
        }
    }
}

impl ExerciseId {
    pub const ALL: [ExerciseId; 18] = [
        ExerciseId::BarbellBenchPress,
        ExerciseId::DumbbellFly,
        ExerciseId::RopeTricepsPushdown,
        ExerciseId::InclinePress,
        ExerciseId::FrenchPress,
        ExerciseId::PeckDeck,
        ExerciseId::FrontLatPulldown,
        ExerciseId::SeatedRow,
        ExerciseId::BarbellCurl,
        ExerciseId::WideGripPulldown,
        ExerciseId::HammerCurl,
        ExerciseId::Pullover,
        ExerciseId::BackSquat,
        ExerciseId::StiffLegDeadlift,
        ExerciseId::DumbbellShoulderPress,
        ExerciseId::LateralRaise,
        ExerciseId::StandingCalfRaise,
        ExerciseId::ReverseFly,
    ];

    pub fn entry(self) -> &'static CatalogEntry {
        match self {
            ExerciseId::BarbellBenchPress => &BARBELL_BENCH_PRESS,
            ExerciseId::DumbbellFly => &DUMBBELL_FLY,
            ExerciseId::RopeTricepsPushdown => &ROPE_TRICEPS_PUSHDOWN,
            ExerciseId::InclinePress => &INCLINE_PRESS,
            ExerciseId::FrenchPress => &FRENCH_PRESS,
            ExerciseId::PeckDeck => &PECK_DECK,
            ExerciseId::FrontLatPulldown => &FRONT_LAT_PULLDOWN,
            ExerciseId::SeatedRow => &SEATED_ROW,
            ExerciseId::BarbellCurl => &BARBELL_CURL,
            ExerciseId::WideGripPulldown => &WIDE_GRIP_PULLDOWN,
            ExerciseId::HammerCurl => &HAMMER_CURL,
            ExerciseId::Pullover => &PULLOVER,
            ExerciseId::BackSquat => &BACK_SQUAT,
            ExerciseId::StiffLegDeadlift => &STIFF_LEG_DEADLIFT,
            ExerciseId::DumbbellShoulderPress => &DUMBBELL_SHOULDER_PRESS,
            ExerciseId::LateralRaise => &LATERAL_RAISE,
            ExerciseId::StandingCalfRaise => &STANDING_CALF_RAISE,
            ExerciseId::ReverseFly => &REVERSE_FLY,
        }
    }
}

// ============================================================================
// Push: chest and triceps
// ============================================================================

const BARBELL_BENCH_PRESS: CatalogEntry = CatalogEntry {
    name: "Supino reto com barra",
    target: "peitoral",
    alternatives: [
        "Supino inclinado com halteres",
        "Crucifixo na máquina",
        "Flexão de braço",
    ],
    series: 4,
    repetitions: "8-12",
    rest_time: 60,
};

const DUMBBELL_FLY: CatalogEntry = CatalogEntry {
    name: "Crucifixo com halteres",
    target: "peitoral",
    alternatives: ["Crucifixo na máquina", "Crossover", "Flexão de braço"],
    series: 3,
    repetitions: "10-12",
    rest_time: 45,
};

const ROPE_TRICEPS_PUSHDOWN: CatalogEntry = CatalogEntry {
    name: "Tríceps corda",
    target: "tríceps",
    alternatives: ["Tríceps francês", "Tríceps testa", "Mergulho no banco"],
    series: 3,
    repetitions: "12-15",
    rest_time: 45,
};

const INCLINE_PRESS: CatalogEntry = CatalogEntry {
    name: "Supino inclinado",
    target: "peitoral superior",
    alternatives: [
        "Supino inclinado com halteres",
        "Flexão de braço inclinada",
        "Máquina de supino inclinado",
    ],
    series: 3,
    repetitions: "10-12",
    rest_time: 60,
};

const FRENCH_PRESS: CatalogEntry = CatalogEntry {
    name: "Tríceps francês",
    target: "tríceps",
    alternatives: ["Tríceps testa", "Tríceps coice", "Fundos no banco"],
    series: 3,
    repetitions: "10-12",
    rest_time: 45,
};

const PECK_DECK: CatalogEntry = CatalogEntry {
    name: "Peck deck",
    target: "peitoral",
    alternatives: ["Crossover", "Crucifixo com cabos", "Push-up"],
    series: 3,
    repetitions: "12-15",
    rest_time: 45,
};

// ============================================================================
// Pull: back and biceps
// ============================================================================

const FRONT_LAT_PULLDOWN: CatalogEntry = CatalogEntry {
    name: "Puxada frontal",
    target: "costas",
    alternatives: ["Remada curvada", "Puxada alta", "Remada unilateral"],
    series: 3,
    repetitions: "10-15",
    rest_time: 60,
};

const SEATED_ROW: CatalogEntry = CatalogEntry {
    name: "Remada baixa",
    target: "costas",
    alternatives: ["Remada curvada", "Remada cavalinho", "Pull down"],
    series: 3,
    repetitions: "10-12",
    rest_time: 45,
};

const BARBELL_CURL: CatalogEntry = CatalogEntry {
    name: "Rosca direta",
    target: "bíceps",
    alternatives: ["Rosca alternada", "Rosca martelo", "Rosca scott"],
    series: 3,
    repetitions: "10-12",
    rest_time: 45,
};

const WIDE_GRIP_PULLDOWN: CatalogEntry = CatalogEntry {
    name: "Puxada aberta",
    target: "dorsal",
    alternatives: ["Puxada triângulo", "Puxada pulley", "Barra fixa"],
    series: 3,
    repetitions: "10-12",
    rest_time: 60,
};

const HAMMER_CURL: CatalogEntry = CatalogEntry {
    name: "Rosca martelo",
    target: "bíceps e braquial",
    alternatives: ["Rosca 21", "Rosca scott", "Rosca concentrada"],
    series: 3,
    repetitions: "10-12",
    rest_time: 45,
};

const PULLOVER: CatalogEntry = CatalogEntry {
    name: "Pull-over",
    target: "dorsal e serrátil",
    alternatives: ["Pull-over com halter", "Pulldown", "Remada alta"],
    series: 3,
    repetitions: "12-15",
    rest_time: 45,
};

// ============================================================================
// Legs and shoulders
// ============================================================================

const BACK_SQUAT: CatalogEntry = CatalogEntry {
    name: "Agachamento livre",
    target: "quadríceps",
    alternatives: ["Leg press", "Agachamento sumô", "Cadeira extensora"],
    series: 4,
    repetitions: "10-12",
    rest_time: 60,
};

const STIFF_LEG_DEADLIFT: CatalogEntry = CatalogEntry {
    name: "Stiff",
    target: "posterior de coxa",
    alternatives: ["Mesa flexora", "Leg curl", "Cadeira flexora"],
    series: 3,
    repetitions: "10-12",
    rest_time: 45,
};

const DUMBBELL_SHOULDER_PRESS: CatalogEntry = CatalogEntry {
    name: "Desenvolvimento com halteres",
    target: "ombros",
    alternatives: [
        "Elevação lateral",
        "Desenvolvimento máquina",
        "Crucifixo inverso",
    ],
    series: 3,
    repetitions: "10-12",
    rest_time: 45,
};

const LATERAL_RAISE: CatalogEntry = CatalogEntry {
    name: "Elevação lateral",
    target: "deltoide lateral",
    alternatives: [
        "Elevação frontal",
        "Pássaro",
        "Elevação lateral na máquina",
    ],
    series: 3,
    repetitions: "12-15",
    rest_time: 45,
};

const STANDING_CALF_RAISE: CatalogEntry = CatalogEntry {
    name: "Panturrilha em pé",
    target: "gastrocnêmio",
    alternatives: [
        "Panturrilha sentado",
        "Elevação de panturrilha no leg press",
        "Saltos",
    ],
    series: 4,
    repetitions: "15-20",
    rest_time: 30,
};

const REVERSE_FLY: CatalogEntry = CatalogEntry {
    name: "Crucifixo inverso",
    target: "deltoide posterior",
    alternatives: ["Pássaro", "Face pull", "Remada alta"],
    series: 3,
    repetitions: "12-15",
    rest_time: 45,
};
