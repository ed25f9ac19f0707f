use crate::services::profile::{ExperienceLevel, Profile};
use crate::services::templates::{TEMPLATE_LETTERS, exercises_per_session};

pub fn format_profile_for_prompt(profile: &Profile) -> String {
    let mut output = format!("- Idade: {} anos\n", profile.age);
    output.push_str(&format!("- Altura: {} cm\n", profile.height));
    output.push_str(&format!("- Tipo de corpo: {}\n", profile.body_type));
    output.push_str(&format!("- Objetivo: {}\n", profile.goal));
    output.push_str(&format!(
        "- Dias disponíveis para treino por semana: {}\n",
        profile.training_days
    ));
    output.push_str(&format!(
        "- Tempo disponível para cada treino: {} minutos\n",
        profile.training_time
    ));
    output.push_str(&format!(
        "- Nível de experiência: {}\n",
        profile.experience_level
    ));
    output.push_str(&format!("- Condição atual: {}\n", profile.current_condition));
    output
}

fn format_session_letters(training_days: u8) -> String {
    TEMPLATE_LETTERS
        .iter()
        .take(usize::from(training_days))
        .map(|letter| letter.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_exercise_budget() -> String {
    ExperienceLevel::ALL
        .iter()
        .map(|level| {
            format!(
                "- {}: {} exercícios por treino\n",
                level,
                exercises_per_session(*level)
            )
        })
        .collect::<Vec<_>>()
        .join("")
}

pub fn build_training_plan_prompt(profile: &Profile) -> String {
    format!(
        r#"Você é um personal trainer especializado em criar planos de treino personalizados.
Crie um plano de treino para uma pessoa com as seguintes características:

{}
Crie {} treinos diferentes ({}).
Cada treino deve focar em grupos musculares relacionados (ex: peito/tríceps, costas/bíceps, pernas/ombros).
A quantidade de exercícios por treino depende do nível:
{}
Para cada exercício, forneça:
- Nome do exercício
- Grupo muscular alvo
- Nível de dificuldade ("{}")
- Exatamente 3 exercícios alternativos, diferentes do exercício principal
- Número de séries (normalmente entre 3-5)
- Número de repetições (ex: "8-12", "12-15", "15-20")
- Tempo de descanso entre séries, em segundos (normalmente entre 30-90)

Responda apenas com um JSON no seguinte formato:
{{
    "workouts": [
        {{
            "name": "Treino A",
            "exercises": [
                {{
                    "name": "Nome do exercício",
                    "target": "grupo muscular",
                    "level": "{}",
                    "alternatives": ["alternativa 1", "alternativa 2", "alternativa 3"],
                    "series": 3,
                    "repetitions": "12-15",
                    "rest_time": 60
                }}
            ]
        }}
    ]
}}"#,
        format_profile_for_prompt(profile),
        profile.training_days,
        format_session_letters(profile.training_days),
        format_exercise_budget(),
        profile.experience_level,
        profile.experience_level,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::profile::tests::profile;

    #[test]
    fn test_prompt_contains_profile() {
        let prompt = build_training_plan_prompt(&profile(4, ExperienceLevel::Intermediate));

        assert!(prompt.contains("- Idade: 25 anos"));
        assert!(prompt.contains("- Objetivo: Hipertrofia"));
        assert!(prompt.contains("Crie 4 treinos diferentes (A, B, C, D)."));
        assert!(prompt.contains("- Nível de experiência: Intermediário"));
    }

    #[test]
    fn test_prompt_lists_exercise_budget_per_level() {
        let prompt = build_training_plan_prompt(&profile(1, ExperienceLevel::Beginner));

        assert!(prompt.contains("- Iniciante: 3 exercícios por treino"));
        assert!(prompt.contains("- Intermediário: 5 exercícios por treino"));
        assert!(prompt.contains("- Avançado: 6 exercícios por treino"));
        assert!(prompt.contains("\"workouts\": ["));
    }
}
