//! Phrase pools for the bulletin
//!
//! Templates use `{date}`, `{tmin}`, `{tmax}` and `{prob}` slots, filled by
//! [`fill`].

/// Town the bulletin is written for
pub const STATION: &str = "Zagarolo";

pub const OPENINGS: &[&str] = &[
    "Buongiorno amici! Ecco le previsioni per {date}:",
    "Ciao a tutti! Che tempo ci aspetta {date}?",
    "Salve radioascoltatori! Vi racconto il tempo di {date}:",
    "Buongiorno Zagarolo! Come sarà {date}?",
];

pub const TEMPERATURES: &[&str] = &[
    "Le temperature andranno da un freschetto {tmin}°C fino ai {tmax}°C",
    "Minima di {tmin}°C e massima di {tmax}°C",
    "Termometro che oscillerà tra {tmin}°C e {tmax}°C",
];

/// Probability above 70%
pub const RAIN_LIKELY: &[&str] = &[
    "Molto probabilmente pioverà (probabilità {prob}%)",
    "Tenete l'ombrello a portata di mano, {prob}% di pioggia!",
    "Quasi certo che pioverà, {prob}% di probabilità",
];

/// Probability above 40% up to 70%
pub const RAIN_POSSIBLE: &[&str] = &[
    "Forse qualche goccia cadrà ({prob}% di probabilità)",
    "Cielo incerto, {prob}% di possibili piogge",
    "Non si sa mai, {prob}% di pioggia",
];

/// Probability up to 40%
pub const RAIN_UNLIKELY: &[&str] = &[
    "Poche probabilità di pioggia (solo {prob}%)",
    "Dovrebbe rimanere asciutto, solo {prob}% di pioggia",
    "Ombrello a casa, {prob}% di pioggia",
];

/// More than 2 mm of rain
pub const CONCLUSIONS_RAINY: &[&str] = &[
    "Insomma, meglio non programmare picnic all'aperto!",
    "Una giornata perfetta per stare al calduccio in casa.",
    "Ideale per leggere un libro con una bella tazza di tè.",
];

/// Maximum above 30°C
pub const CONCLUSIONS_HOT: &[&str] = &[
    "Una bella giornata per stare all'aria aperta!",
    "Perfetto per una passeggiata nel centro di Zagarolo.",
    "Tempo ideale per un gelato in piazza!",
];

pub const CONCLUSIONS_MILD: &[&str] = &[
    "Una giornata piacevole vi aspetta!",
    "Tempo gradevole per le vostre attività.",
    "Tutto sommato, una bella giornata!",
];

// Weather descriptions, by condition class
pub const CLEAR_SKY: &[&str] = &[
    "cielo sereno e soleggiato",
    "una giornata di sole splendente",
    "cielo limpido senza una nuvola",
];
pub const MOSTLY_SUNNY: &str = "qualche nuvola qua e là ma prevalentemente soleggiato";
pub const CLOUDY_WET: &[&str] = &[
    "nuvole con qualche pioggerella",
    "cielo coperto con possibili rovesci",
    "tempo variabile con pioggia intermittente",
];
pub const CLOUDY_DRY: &[&str] = &[
    "nuvole sparse nel cielo",
    "tempo nuvoloso ma asciutto",
    "cielo coperto ma senza pioggia",
];
pub const HEAVY_RAIN: &str = "pioggia abbondante";
pub const MODERATE_RAIN: &str = "pioggia moderata";
pub const LIGHT_RAIN: &str = "qualche goccia di pioggia";
pub const THUNDERSTORMS: &str = "temporali in arrivo";
pub const VARIABLE: &str = "tempo variabile";

pub const SIGN_OFF: &str = "Restate sintonizzati per gli aggiornamenti! 📻🌤️";

/// Substitute `{name}` slots in a template
#[must_use]
pub fn fill(template: &str, slots: &[(&str, &str)]) -> String {
    slots
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_every_slot() {
        let text = fill(TEMPERATURES[1], &[("tmin", "8.2"), ("tmax", "16.4")]);
        assert_eq!(text, "Minima di 8.2°C e massima di 16.4°C");
    }

    #[test]
    fn test_fill_leaves_unknown_slots() {
        assert_eq!(fill("{date}!", &[("prob", "10")]), "{date}!");
    }

    #[test]
    fn test_pool_sizes() {
        assert_eq!(OPENINGS.len(), 4);
        for pool in [
            TEMPERATURES,
            RAIN_LIKELY,
            RAIN_POSSIBLE,
            RAIN_UNLIKELY,
            CONCLUSIONS_RAINY,
            CONCLUSIONS_HOT,
            CONCLUSIONS_MILD,
            CLEAR_SKY,
            CLOUDY_WET,
            CLOUDY_DRY,
        ] {
            assert_eq!(pool.len(), 3);
        }
    }

    #[test]
    fn test_templates_use_their_slots() {
        assert!(OPENINGS.iter().all(|t| t.contains("{date}")));
        assert!(TEMPERATURES
            .iter()
            .all(|t| t.contains("{tmin}") && t.contains("{tmax}")));
        for pool in [RAIN_LIKELY, RAIN_POSSIBLE, RAIN_UNLIKELY] {
            assert!(pool.iter().all(|t| t.contains("{prob}%")));
        }
    }
}
