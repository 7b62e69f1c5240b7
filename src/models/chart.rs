use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::constants::TOP_SECTION_LEN;

/// Ventana temporal del ranking de descargas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Week,
    Month,
    Year,
    All,
}

impl Period {
    pub const ALL_PERIODS: [Period; 4] = [Period::Week, Period::Month, Period::Year, Period::All];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
            Period::All => "all",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// El id llega como número o como string según el almacenamiento del backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

/// Una entrada del ranking. El rango es la posición en la lista, no un campo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartItem {
    #[serde(default)]
    pub id: Option<ItemId>,
    #[serde(default, deserialize_with = "non_empty")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub artist: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub thumbnail_url: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub youtube_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub downloads: u64,
}

// El backend manda "" o null indistintamente para campos vacíos
fn non_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

impl ChartItem {
    /// Query para el bot: la URL directa si existe; si no, "artista título".
    /// `None` si no hay nada que buscar.
    pub fn send_query(&self) -> Option<String> {
        if let Some(url) = self.youtube_url.as_deref().filter(|u| !u.is_empty()) {
            return Some(url.to_string());
        }
        let text = format!(
            "{} {}",
            self.artist.as_deref().unwrap_or(""),
            self.title.as_deref().unwrap_or("")
        );
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }

    /// Marca del slot de envío pendiente: el id, o la query derivada.
    pub fn pending_key(&self, query: &str) -> String {
        match &self.id {
            Some(id) => id.to_string(),
            None => query.to_string(),
        }
    }
}

/// Separa el ranking en tarjetas top y resto, sin alterar el orden.
pub fn partition_ranked(items: &[ChartItem]) -> (&[ChartItem], &[ChartItem]) {
    items.split_at(items.len().min(TOP_SECTION_LEN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> ChartItem {
        ChartItem {
            id: None,
            title: Some(title.to_string()),
            artist: None,
            thumbnail_url: None,
            youtube_url: None,
            downloads: 0,
        }
    }

    #[test]
    fn period_wire_names_are_lowercase() {
        for period in Period::ALL_PERIODS {
            let json = serde_json::to_string(&period).unwrap();
            assert_eq!(json, format!("\"{}\"", period.as_str()));
        }
        assert_eq!(Period::default(), Period::Week);
    }

    #[test]
    fn partition_keeps_rank_order() {
        let items: Vec<ChartItem> = (1..=5).map(|i| item(&format!("t{}", i))).collect();
        let (top, rest) = partition_ranked(&items);
        assert_eq!(top, &items[0..3]);
        assert_eq!(rest, &items[3..5]);
    }

    #[test]
    fn partition_short_lists_have_empty_remainder() {
        for n in 0..3 {
            let items: Vec<ChartItem> = (0..n).map(|i| item(&i.to_string())).collect();
            let (top, rest) = partition_ranked(&items);
            assert_eq!(top.len(), n);
            assert!(rest.is_empty());
        }
    }

    #[test]
    fn send_query_prefers_url() {
        let mut it = item("Song");
        it.artist = Some("Band".into());
        assert_eq!(it.send_query().as_deref(), Some("Band Song"));

        it.youtube_url = Some("https://youtu.be/abc".into());
        assert_eq!(it.send_query().as_deref(), Some("https://youtu.be/abc"));
    }

    #[test]
    fn send_query_handles_missing_fields() {
        let mut it = item("Only Title");
        assert_eq!(it.send_query().as_deref(), Some("Only Title"));

        it.title = None;
        assert_eq!(it.send_query(), None);
    }

    #[test]
    fn pending_key_uses_id_when_present() {
        let mut it = item("x");
        assert_eq!(it.pending_key("x"), "x");
        it.id = Some(ItemId::Number(42));
        assert_eq!(it.pending_key("x"), "42");
    }

    #[test]
    fn chart_item_tolerates_sparse_json() {
        let it: ChartItem = serde_json::from_str(
            r#"{"id":"abc","title":"T","downloads":7,"youtube_url":null}"#,
        )
        .unwrap();
        assert_eq!(it.id, Some(ItemId::Text("abc".into())));
        assert_eq!(it.downloads, 7);
        assert_eq!(it.artist, None);
    }

    #[test]
    fn empty_strings_decode_as_missing() {
        let it: ChartItem = serde_json::from_str(
            r#"{"title":"","artist":"","thumbnail_url":"","youtube_url":"","downloads":3}"#,
        )
        .unwrap();
        assert_eq!(it.title, None);
        assert_eq!(it.artist, None);
        assert_eq!(it.thumbnail_url, None);
        assert_eq!(it.youtube_url, None);
        assert_eq!(it.send_query(), None);
    }

    #[test]
    fn null_downloads_does_not_sink_the_list() {
        let items: Vec<ChartItem> = serde_json::from_str(
            r#"[{"title":"ok","downloads":5},{"title":"new","downloads":null}]"#,
        )
        .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].downloads, 5);
        assert_eq!(items[1].downloads, 0);
        assert_eq!(items[1].title.as_deref(), Some("new"));
    }
}
