//! Keyword table driving domain detection

use super::domain_label::DomainLabel;
use crate::core::query::normalize;

const EXPERIENCES_KEYWORDS: &[&str] = &[
    "actividad",
    "actividades",
    "experiencia",
    "experiencias",
    "tour",
    "tours",
    "visita",
    "visitas",
    "excursión",
    "excursiones",
    "buceo",
    "snorkel",
    "senderismo",
    "rafting",
    "yoga",
    "aventura",
    "aventuras",
    "qué hacer",
    "qué ver",
    "ver",
    "visitar",
];

const LODGING_KEYWORDS: &[&str] = &[
    "hotel",
    "hoteles",
    "alojamiento",
    "alojamientos",
    "hospedaje",
    "cabaña",
    "cabañas",
    "resort",
    "resorts",
    "hostal",
    "hostelería",
    "dónde dormir",
    "dónde quedarme",
    "dónde hospedarse",
    "habitación",
    "cuarto",
];

const TRANSPORTATION_KEYWORDS: &[&str] = &[
    "transporte",
    "transportes",
    "transfer",
    "transfers",
    "ruta",
    "rutas",
    "cómo llegar",
    "cómo ir",
    "vuelo",
    "vuelos",
    "avión",
    "autobús",
    "bus",
    "taxi",
    "uber",
    "carro",
    "auto",
    "coche",
    "llegada",
    "salida",
    "desplazamiento",
];

const DATABASE_KEYWORDS: &[&str] = &[
    "disponibilidad",
    "disponible",
    "cuándo",
    "fechas",
    "precio",
    "precios",
    "costo",
    "costos",
    "información",
    "detalles",
    "especificaciones",
    "buscar",
    "búsqueda",
    "filter",
    "filtro",
];

/// Ordered mapping of domain → keywords (Value Object)
///
/// Keywords are stored normalized. Entry order is detection order, so the
/// domains of a [`QueryAnalysis`](super::analysis::QueryAnalysis) come out
/// in table order no matter where they appear in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    entries: Vec<(DomainLabel, Vec<String>)>,
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KeywordTable {
    /// The built-in Spanish keyword lists for every specialist domain
    pub fn builtin() -> Self {
        let entries = DomainLabel::SPECIALISTS
            .iter()
            .map(|domain| {
                let words = Self::builtin_keywords(*domain)
                    .iter()
                    .map(|k| normalize(k))
                    .collect();
                (*domain, words)
            })
            .collect();
        Self { entries }
    }

    /// An empty table; every query classifies as general
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn builtin_keywords(domain: DomainLabel) -> &'static [&'static str] {
        match domain {
            DomainLabel::Experiences => EXPERIENCES_KEYWORDS,
            DomainLabel::Lodging => LODGING_KEYWORDS,
            DomainLabel::Transportation => TRANSPORTATION_KEYWORDS,
            DomainLabel::Database => DATABASE_KEYWORDS,
            DomainLabel::General => &[],
        }
    }

    /// Replace (or add) the keyword list of one domain.
    ///
    /// Blank keywords are dropped. `General` is never detectable, so an
    /// override for it is ignored.
    pub fn with_keywords<I, S>(mut self, domain: DomainLabel, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !domain.is_specialist() {
            return self;
        }
        let words: Vec<String> = keywords
            .into_iter()
            .map(|k| normalize(k.as_ref()))
            .filter(|k| !k.is_empty())
            .collect();

        match self.entries.iter_mut().find(|(d, _)| *d == domain) {
            Some((_, existing)) => *existing = words,
            None => self.entries.push((domain, words)),
        }
        self
    }

    /// Remove a domain from detection entirely
    pub fn without(mut self, domain: DomainLabel) -> Self {
        self.entries.retain(|(d, _)| *d != domain);
        self
    }

    /// Domains that can be detected, in detection order
    pub fn domains(&self) -> impl Iterator<Item = DomainLabel> + '_ {
        self.entries.iter().map(|(d, _)| *d)
    }

    pub fn keywords(&self, domain: DomainLabel) -> &[String] {
        self.entries
            .iter()
            .find(|(d, _)| *d == domain)
            .map(|(_, words)| words.as_slice())
            .unwrap_or(&[])
    }

    /// Domains whose keywords occur in already-normalized text
    pub fn detect(&self, normalized: &str) -> Vec<DomainLabel> {
        self.entries
            .iter()
            .filter(|(_, words)| words.iter().any(|w| contains_keyword(normalized, w)))
            .map(|(d, _)| *d)
            .collect()
    }
}

/// Whether `keyword` occurs in `text` delimited by non-alphanumeric chars
/// (or the ends of the text). Keeps short keywords like `ver` or `bus` from
/// firing inside unrelated words.
pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }
    text.match_indices(keyword).any(|(start, matched)| {
        let end = start + matched.len();
        let before_ok = text[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let after_ok = text[end..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());
        before_ok && after_ok
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_boundaries() {
        assert!(contains_keyword("dame hotel en cancún", "hotel"));
        assert!(contains_keyword("¿hoteles en playa?", "hoteles"));
        assert!(!contains_keyword("reservar en verano", "ver"));
        assert!(contains_keyword("qué hay que ver.", "ver"));
        assert!(!contains_keyword("autorización", "auto"));
        assert!(contains_keyword("quiero saber cómo llegar desde la capital", "cómo llegar"));
        assert!(!contains_keyword("hotel", ""));
    }

    #[test]
    fn test_builtin_detection_order() {
        let table = KeywordTable::builtin();
        let found = table.detect("hotel, experiencias y transfer desde el aeropuerto");
        assert_eq!(
            found,
            vec![
                DomainLabel::Experiences,
                DomainLabel::Lodging,
                DomainLabel::Transportation
            ]
        );
    }

    #[test]
    fn test_builtin_keywords_are_normalized() {
        let table = KeywordTable::builtin();
        assert!(table.keywords(DomainLabel::Transportation).contains(&"uber".to_string()));
        assert!(table.keywords(DomainLabel::General).is_empty());
    }

    #[test]
    fn test_override_replaces_list() {
        let table = KeywordTable::builtin().with_keywords(DomainLabel::Lodging, ["Glamping", " "]);
        assert_eq!(table.keywords(DomainLabel::Lodging), &["glamping".to_string()]);
        assert!(table.detect("quiero un hotel").is_empty());
        assert_eq!(table.detect("un glamping en bacalar"), vec![DomainLabel::Lodging]);
    }

    #[test]
    fn test_override_for_general_is_ignored() {
        let table = KeywordTable::builtin().with_keywords(DomainLabel::General, ["hola"]);
        assert!(table.domains().all(|d| d != DomainLabel::General));
    }

    #[test]
    fn test_without_removes_domain() {
        let table = KeywordTable::builtin().without(DomainLabel::Database);
        assert!(table.domains().all(|d| d != DomainLabel::Database));
        assert!(table.detect("precios y fechas").is_empty());
    }
}
