//! Dedication text generation
//!
//! Every delivered song carries a short templated message derived from its
//! occasion and relationship fields. The choice looks random but is a
//! deterministic hash of the song id, so a shared link always shows the
//! same dedication on every visit and every device.
//!
//! The seed formula (sum of id character codes, modulo pool length, with a
//! 2-in-5 relationship override) is load-bearing: existing links depend on
//! it, so it must not change.

use crate::types::Song;

/// Occasion-specific template pools (2-3 variants each)
///
/// `{name}` interpolates the recipient name.
const OCCASION_POOLS: [(&str, &[&str]); 6] = [
    (
        "cumpleanos",
        &[
            "Feliz cumpleanos, {name}. Esta cancion fue hecha solo para ti.",
            "{name}, hoy es tu dia y el mundo necesita escucharlo en tu cancion.",
            "Que este nuevo ano de vida suene tan bonito como tu, {name}.",
        ],
    ),
    (
        "aniversario",
        &[
            "{name}, cada ano contigo merece su propia cancion.",
            "Un aniversario mas, {name}, y una melodia nueva para celebrarlo.",
        ],
    ),
    (
        "boda",
        &[
            "{name}, que esta cancion acompane el comienzo de su historia.",
            "Para ti, {name}, en el dia mas importante: una cancion para siempre.",
        ],
    ),
    (
        "graduacion",
        &[
            "Lo lograste, {name}. Esta cancion celebra todo tu esfuerzo.",
            "{name}, este logro merecia mas que un aplauso: merecia una cancion.",
        ],
    ),
    (
        "san-valentin",
        &[
            "{name}, algunas cosas no se pueden decir hablando. Por eso te canto.",
            "Para {name}, con todo el amor que cabe en una cancion.",
        ],
    ),
    (
        "dia-de-la-madre",
        &[
            "{name}, ninguna cancion alcanza para agradecerte, pero esta lo intenta.",
            "Para la mejor mama del mundo: esta cancion es tuya, {name}.",
        ],
    ),
];

/// Relationship-specific templates (one each)
const RELATIONSHIP_TEMPLATES: [(&str, &str); 8] = [
    ("mama", "Mama {name}, esta melodia lleva todo lo que nos has dado."),
    ("papa", "Papa {name}, esta cancion es un abrazo que suena."),
    ("esposa", "{name}, mi esposa, mi cancion favorita eres tu."),
    ("esposo", "{name}, mi esposo, cada nota de esta cancion es nuestra."),
    ("novia", "{name}, esta cancion dice lo que me pasa cuando te veo."),
    ("novio", "{name}, te escribi una cancion porque contigo todo suena mejor."),
    ("amiga", "{name}, las amigas como tu merecen su propia banda sonora."),
    ("amigo", "{name}, esta cancion es para el amigo que siempre esta."),
];

/// Fallback pool when the occasion is unrecognized
const GENERIC_POOL: [&str; 2] = [
    "{name}, alguien que te quiere convirtio lo que siente en esta cancion.",
    "Esta cancion existe por una sola razon: tu, {name}.",
];

/// Chance window for the relationship override: seed % 5 in [0, 2)
const RELATIONSHIP_CHANCE_MOD: usize = 5;
const RELATIONSHIP_CHANCE_WINDOW: usize = 2;

/// Generate the dedication message for a song
///
/// Deterministic: the same record always yields the same text.
pub fn generate_dedication(song: &Song) -> String {
    let seed = id_seed(song.id.as_str());

    if let Some(template) = relationship_template(&song.relationship) {
        if seed % RELATIONSHIP_CHANCE_MOD < RELATIONSHIP_CHANCE_WINDOW {
            return render(template, &song.recipient_name);
        }
    }

    let pool = occasion_pool(&song.occasion);
    render(pool[seed % pool.len()], &song.recipient_name)
}

/// Deterministic seed: sum of the id's character codes
fn id_seed(id: &str) -> usize {
    id.chars().map(|c| c as usize).sum()
}

fn occasion_pool(occasion: &str) -> &'static [&'static str] {
    let key = occasion.trim().to_lowercase();
    OCCASION_POOLS
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(&GENERIC_POOL[..], |(_, pool)| pool)
}

fn relationship_template(relationship: &str) -> Option<&'static str> {
    let key = relationship.trim().to_lowercase();
    RELATIONSHIP_TEMPLATES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, template)| *template)
}

fn render(template: &str, name: &str) -> String {
    template.replace("{name}", name)
}
