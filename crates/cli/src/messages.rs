//! User-facing outcome lines.

use toyraffle_catalog::DrawOutcome;
use toyraffle_infra::Locale;

pub fn congratulations(locale: Locale, name: &str) -> String {
    match locale {
        Locale::En => format!("Congratulations! You won {name}"),
        Locale::Ru => format!("Поздравляем! Вы выиграли {name}"),
    }
}

pub fn nothing_available(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "No toys available for the raffle.",
        Locale::Ru => "Нет доступных игрушек для розыгрыша.",
    }
}

pub fn outcome_line(locale: Locale, outcome: &DrawOutcome) -> String {
    match outcome.winner() {
        Some(item) => congratulations(locale, item.name()),
        None => nothing_available(locale).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toyraffle_catalog::NoResult;

    #[test]
    fn lines_per_locale() {
        assert_eq!(
            congratulations(Locale::En, "Doll"),
            "Congratulations! You won Doll"
        );
        assert_eq!(
            congratulations(Locale::Ru, "Doll"),
            "Поздравляем! Вы выиграли Doll"
        );

        let none = DrawOutcome::NoResult(NoResult::EmptyCatalog);
        assert_eq!(outcome_line(Locale::En, &none), "No toys available for the raffle.");
        assert_eq!(
            outcome_line(Locale::Ru, &none),
            "Нет доступных игрушек для розыгрыша."
        );
    }
}
