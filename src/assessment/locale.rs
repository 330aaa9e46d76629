use super::domain::Language;
use std::collections::HashMap;
use std::sync::OnceLock;

static RESOURCES: OnceLock<HashMap<(&'static str, Language), &'static str>> = OnceLock::new();

/// Resolve a resource key for a language. Missing translations fall back
/// to English; a key absent from the table entirely comes back verbatim
/// so a gap is visible in output instead of silently dropped.
pub fn text(key: &'static str, language: Language) -> &'static str {
    let resources = resources();
    resources
        .get(&(key, language))
        .or_else(|| resources.get(&(key, Language::En)))
        .copied()
        .unwrap_or(key)
}

fn resources() -> &'static HashMap<(&'static str, Language), &'static str> {
    RESOURCES.get_or_init(|| {
        let mut map = HashMap::with_capacity(STRINGS.len());
        for (key, language, value) in STRINGS {
            map.insert((*key, *language), *value);
        }
        map
    })
}

const STRINGS: &[(&str, Language, &str)] = &[
    // Creative Enthusiast mentor content
    (
        "mentor.passion.reflection.1",
        Language::En,
        "What did you create this week that felt entirely yours?",
    ),
    (
        "mentor.passion.reflection.1",
        Language::Es,
        "\u{00bf}Qu\u{00e9} creaste esta semana que sentiste completamente tuyo?",
    ),
    (
        "mentor.passion.reflection.2",
        Language::En,
        "When did you lose track of time, and what were you doing?",
    ),
    (
        "mentor.passion.reflection.2",
        Language::Es,
        "\u{00bf}Cu\u{00e1}ndo perdiste la noci\u{00f3}n del tiempo y qu\u{00e9} estabas haciendo?",
    ),
    (
        "mentor.passion.reflection.3",
        Language::En,
        "Which idea have you been circling but not started?",
    ),
    (
        "mentor.passion.reflection.3",
        Language::Es,
        "\u{00bf}Qu\u{00e9} idea llevas rondando sin empezar todav\u{00ed}a?",
    ),
    (
        "mentor.passion.reflection.4",
        Language::En,
        "What would you make if nobody ever saw the result?",
    ),
    (
        "mentor.passion.reflection.4",
        Language::Es,
        "\u{00bf}Qu\u{00e9} har\u{00ed}as si nadie fuera a ver el resultado?",
    ),
    (
        "mentor.passion.tip.1",
        Language::En,
        "Protect at least one unscheduled creative hour every week.",
    ),
    (
        "mentor.passion.tip.1",
        Language::Es,
        "Protege al menos una hora creativa sin agenda cada semana.",
    ),
    (
        "mentor.passion.tip.2",
        Language::En,
        "Ship small pieces often instead of waiting for the perfect one.",
    ),
    (
        "mentor.passion.tip.2",
        Language::Es,
        "Publica piezas peque\u{00f1}as con frecuencia en lugar de esperar la perfecta.",
    ),
    (
        "mentor.passion.tip.3",
        Language::En,
        "Keep an idea notebook within reach; capture before you judge.",
    ),
    (
        "mentor.passion.tip.3",
        Language::Es,
        "Ten una libreta de ideas a mano; anota antes de juzgar.",
    ),
    // Purpose-Driven Leader mentor content
    (
        "mentor.mission.reflection.1",
        Language::En,
        "Whose life was a little better this week because of you?",
    ),
    (
        "mentor.mission.reflection.1",
        Language::Es,
        "\u{00bf}La vida de qui\u{00e9}n mejor\u{00f3} un poco esta semana gracias a ti?",
    ),
    (
        "mentor.mission.reflection.2",
        Language::En,
        "Which problem in your community kept pulling your attention?",
    ),
    (
        "mentor.mission.reflection.2",
        Language::Es,
        "\u{00bf}Qu\u{00e9} problema de tu comunidad sigui\u{00f3} llamando tu atenci\u{00f3}n?",
    ),
    (
        "mentor.mission.reflection.3",
        Language::En,
        "Where did your values and your work align, or collide?",
    ),
    (
        "mentor.mission.reflection.3",
        Language::Es,
        "\u{00bf}D\u{00f3}nde coincidieron, o chocaron, tus valores y tu trabajo?",
    ),
    (
        "mentor.mission.reflection.4",
        Language::En,
        "What cause would you work on if money were not a question?",
    ),
    (
        "mentor.mission.reflection.4",
        Language::Es,
        "\u{00bf}En qu\u{00e9} causa trabajar\u{00ed}as si el dinero no importara?",
    ),
    (
        "mentor.mission.tip.1",
        Language::En,
        "Tie one concrete metric to the impact you want to have.",
    ),
    (
        "mentor.mission.tip.1",
        Language::Es,
        "Asocia una m\u{00e9}trica concreta al impacto que quieres lograr.",
    ),
    (
        "mentor.mission.tip.2",
        Language::En,
        "Spend time with people already doing the work you admire.",
    ),
    (
        "mentor.mission.tip.2",
        Language::Es,
        "Pasa tiempo con quienes ya hacen el trabajo que admiras.",
    ),
    (
        "mentor.mission.tip.3",
        Language::En,
        "Say no to busywork that does not serve the mission.",
    ),
    (
        "mentor.mission.tip.3",
        Language::Es,
        "Di no a las tareas que no sirven a la misi\u{00f3}n.",
    ),
    // Skilled Expert mentor content
    (
        "mentor.vocation.reflection.1",
        Language::En,
        "Which skill felt sharper this week than last?",
    ),
    (
        "mentor.vocation.reflection.1",
        Language::Es,
        "\u{00bf}Qu\u{00e9} habilidad sentiste m\u{00e1}s afinada esta semana que la anterior?",
    ),
    (
        "mentor.vocation.reflection.2",
        Language::En,
        "What feedback did you receive, and what will you do with it?",
    ),
    (
        "mentor.vocation.reflection.2",
        Language::Es,
        "\u{00bf}Qu\u{00e9} retroalimentaci\u{00f3}n recibiste y qu\u{00e9} har\u{00e1}s con ella?",
    ),
    (
        "mentor.vocation.reflection.3",
        Language::En,
        "Where did you take a shortcut your future self will pay for?",
    ),
    (
        "mentor.vocation.reflection.3",
        Language::Es,
        "\u{00bf}D\u{00f3}nde tomaste un atajo que tu yo futuro pagar\u{00e1}?",
    ),
    (
        "mentor.vocation.reflection.4",
        Language::En,
        "What would deliberate practice look like tomorrow morning?",
    ),
    (
        "mentor.vocation.reflection.4",
        Language::Es,
        "\u{00bf}C\u{00f3}mo ser\u{00ed}a la pr\u{00e1}ctica deliberada ma\u{00f1}ana por la ma\u{00f1}ana?",
    ),
    (
        "mentor.vocation.tip.1",
        Language::En,
        "Work in public; documented craft compounds into reputation.",
    ),
    (
        "mentor.vocation.tip.1",
        Language::Es,
        "Trabaja en p\u{00fa}blico; el oficio documentado se convierte en reputaci\u{00f3}n.",
    ),
    (
        "mentor.vocation.tip.2",
        Language::En,
        "Alternate hard practice blocks with honest rest.",
    ),
    (
        "mentor.vocation.tip.2",
        Language::Es,
        "Alterna bloques de pr\u{00e1}ctica exigente con descanso honesto.",
    ),
    (
        "mentor.vocation.tip.3",
        Language::En,
        "Measure progress against your past self, not the loudest peer.",
    ),
    (
        "mentor.vocation.tip.3",
        Language::Es,
        "Mide tu progreso contra tu yo anterior, no contra el colega m\u{00e1}s ruidoso.",
    ),
    // Career-Focused Achiever mentor content
    (
        "mentor.profession.reflection.1",
        Language::En,
        "What did you do this week that your next role requires?",
    ),
    (
        "mentor.profession.reflection.1",
        Language::Es,
        "\u{00bf}Qu\u{00e9} hiciste esta semana que tu pr\u{00f3}ximo puesto exige?",
    ),
    (
        "mentor.profession.reflection.2",
        Language::En,
        "Which relationship in your network deserves a follow-up?",
    ),
    (
        "mentor.profession.reflection.2",
        Language::Es,
        "\u{00bf}Qu\u{00e9} relaci\u{00f3}n de tu red merece un seguimiento?",
    ),
    (
        "mentor.profession.reflection.3",
        Language::En,
        "What result can you now claim with a number attached?",
    ),
    (
        "mentor.profession.reflection.3",
        Language::Es,
        "\u{00bf}Qu\u{00e9} resultado puedes reclamar ya con una cifra concreta?",
    ),
    (
        "mentor.profession.reflection.4",
        Language::En,
        "Where is the market moving, and are you moving with it?",
    ),
    (
        "mentor.profession.reflection.4",
        Language::Es,
        "\u{00bf}Hacia d\u{00f3}nde se mueve el mercado y te mueves t\u{00fa} con \u{00e9}l?",
    ),
    (
        "mentor.profession.tip.1",
        Language::En,
        "Keep a running brag document; review it before every negotiation.",
    ),
    (
        "mentor.profession.tip.1",
        Language::Es,
        "Mant\u{00e9}n un registro de logros; rev\u{00ed}salo antes de cada negociaci\u{00f3}n.",
    ),
    (
        "mentor.profession.tip.2",
        Language::En,
        "Invest in the two skills your target role lists first.",
    ),
    (
        "mentor.profession.tip.2",
        Language::Es,
        "Invierte en las dos habilidades que tu puesto objetivo pide primero.",
    ),
    (
        "mentor.profession.tip.3",
        Language::En,
        "Treat your career like a product: position it, price it, iterate.",
    ),
    (
        "mentor.profession.tip.3",
        Language::Es,
        "Trata tu carrera como un producto: posiciona, valora, itera.",
    ),
];
