// ============================================================================
// CHARTS STATE - Ranking de descargas por periodo
// ============================================================================
// Cada fetch lleva un ticket con la generación activa. Sólo se aplica la
// respuesta cuyo ticket sigue vigente: cambiar de periodo o desmontar la
// página invalida los fetch en vuelo.
// ============================================================================

use crate::errors::AppError;
use crate::models::{partition_ranked, ChartItem, Period};

pub const EMPTY_CHARTS_MESSAGE: &str = "No data yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub period: Period,
}

/// Qué debe mostrar ahora la sección de charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartsView<'a> {
    Loading,
    Failed(&'a str),
    Empty,
    Loaded {
        top: &'a [ChartItem],
        rest: &'a [ChartItem],
    },
}

/// Reserva del único slot de envío. Nunca hay más de una.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendTicket {
    pub key: String,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartsState {
    pub period: Period,
    generation: u64,
    pub loading: bool,
    pub error: Option<String>,
    pub items: Vec<ChartItem>,
    pending_send: Option<String>,
}

impl Default for ChartsState {
    fn default() -> Self {
        Self::new(Period::default())
    }
}

impl ChartsState {
    pub fn new(period: Period) -> Self {
        Self {
            period,
            generation: 0,
            loading: true,
            error: None,
            items: Vec::new(),
            pending_send: None,
        }
    }

    /// Arranca un fetch del periodo actual y deja obsoleto el que esté en vuelo.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        FetchTicket {
            generation: self.generation,
            period: self.period,
        }
    }

    /// `None` si `period` ya está seleccionado.
    pub fn select_period(&mut self, period: Period) -> Option<FetchTicket> {
        if period == self.period {
            return None;
        }
        self.period = period;
        Some(self.begin_fetch())
    }

    /// Aplica el resultado de un fetch. Devuelve `false` (sin tocar nada) si
    /// el ticket está obsoleto.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<ChartItem>, AppError>,
    ) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "🗑️ Descartando charts obsoletos ({} gen {}, actual gen {})",
                ticket.period,
                ticket.generation,
                self.generation
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }

    /// Desmontaje: ninguna respuesta tardía debe aplicarse.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    pub fn view(&self) -> ChartsView<'_> {
        if self.loading {
            ChartsView::Loading
        } else if let Some(error) = &self.error {
            ChartsView::Failed(error.as_str())
        } else if self.items.is_empty() {
            ChartsView::Empty
        } else {
            let (top, rest) = partition_ranked(&self.items);
            ChartsView::Loaded { top, rest }
        }
    }

    pub fn is_sending(&self) -> bool {
        self.pending_send.is_some()
    }

    /// Toma el slot de envío para `item`. `None` si ya hay un envío pendiente
    /// o el item no tiene nada que buscar.
    pub fn begin_send(&mut self, item: &ChartItem) -> Option<SendTicket> {
        if self.pending_send.is_some() {
            return None;
        }
        let query = item.send_query()?;
        let key = item.pending_key(&query);
        self.pending_send = Some(key.clone());
        Some(SendTicket { key, query })
    }

    /// Libera el slot, haya ido bien o mal.
    pub fn finish_send(&mut self, ticket: &SendTicket) {
        if self.pending_send.as_deref() == Some(ticket.key.as_str()) {
            self.pending_send = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemId;

    fn track(title: &str) -> ChartItem {
        ChartItem {
            id: None,
            title: Some(title.to_string()),
            artist: Some("Artist".into()),
            thumbnail_url: None,
            youtube_url: None,
            downloads: 1,
        }
    }

    #[test]
    fn starts_loading_week() {
        let state = ChartsState::default();
        assert_eq!(state.period, Period::Week);
        assert_eq!(state.view(), ChartsView::Loading);
    }

    #[test]
    fn stale_week_response_is_ignored_after_switch_to_month() {
        let mut state = ChartsState::default();
        let week = state.begin_fetch();
        let month = state.select_period(Period::Month).unwrap();

        assert!(state.apply_fetch(month, Ok(vec![track("month hit")])));
        assert!(!state.apply_fetch(week, Ok(vec![track("week hit")])));

        assert_eq!(state.items, vec![track("month hit")]);
        assert_eq!(state.period, Period::Month);
    }

    #[test]
    fn stale_error_does_not_clobber_fresh_items() {
        let mut state = ChartsState::default();
        let week = state.begin_fetch();
        let year = state.select_period(Period::Year).unwrap();
        state.apply_fetch(year, Ok(vec![track("y")]));
        state.apply_fetch(week, Err(AppError::Network("late".into())));
        assert_eq!(state.error, None);
        assert!(matches!(state.view(), ChartsView::Loaded { .. }));
    }

    #[test]
    fn reselecting_same_period_does_not_refetch() {
        let mut state = ChartsState::default();
        state.begin_fetch();
        assert_eq!(state.select_period(Period::Week), None);
    }

    #[test]
    fn invalidate_drops_in_flight_response() {
        let mut state = ChartsState::default();
        let ticket = state.begin_fetch();
        state.invalidate();
        assert!(!state.apply_fetch(ticket, Ok(vec![track("late")])));
        assert!(state.items.is_empty());
    }

    #[test]
    fn error_and_empty_are_distinct() {
        let mut state = ChartsState::default();
        let t = state.begin_fetch();
        state.apply_fetch(t, Err(AppError::Unexpected("Failed to load charts".into())));
        assert_eq!(state.view(), ChartsView::Failed("Failed to load charts"));

        let t = state.begin_fetch();
        state.apply_fetch(t, Ok(vec![]));
        assert_eq!(state.view(), ChartsView::Empty);
    }

    #[test]
    fn loaded_view_partitions_items() {
        let mut state = ChartsState::default();
        let t = state.begin_fetch();
        let items: Vec<ChartItem> = (0..4).map(|i| track(&i.to_string())).collect();
        state.apply_fetch(t, Ok(items.clone()));
        match state.view() {
            ChartsView::Loaded { top, rest } => {
                assert_eq!(top, &items[..3]);
                assert_eq!(rest, &items[3..]);
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn only_one_send_at_a_time() {
        let mut state = ChartsState::default();
        let mut first = track("one");
        first.id = Some(ItemId::Number(1));

        let ticket = state.begin_send(&first).unwrap();
        assert_eq!(ticket.key, "1");
        assert_eq!(ticket.query, "Artist one");
        assert!(state.is_sending());
        assert_eq!(state.begin_send(&track("two")), None);

        state.finish_send(&ticket);
        assert!(!state.is_sending());
        assert!(state.begin_send(&track("two")).is_some());
    }

    #[test]
    fn item_without_query_does_not_take_the_slot() {
        let mut state = ChartsState::default();
        let blank = ChartItem {
            id: Some(ItemId::Number(9)),
            title: None,
            artist: None,
            thumbnail_url: None,
            youtube_url: None,
            downloads: 0,
        };
        assert_eq!(state.begin_send(&blank), None);
        assert!(!state.is_sending());
    }
}
