use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

/// Ordered field-name -> value mapping. `serde_json` is built with
/// `preserve_order`, so the author's field order survives the round trip.
pub type FieldMap = serde_json::Map<String, Value>;

/// A single review unit. `score` is the running "aciertos" counter; below
/// zero means the card gets recycled into the next round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Card {
    pub id: String,
    #[serde(rename = "contenido", default)]
    pub content: FieldMap,
    #[serde(rename = "aciertos", default)]
    pub score: i64,
    /// Anything the server sends that we do not model, kept so a merge never
    /// drops fields the client did not ask about.
    #[serde(flatten)]
    pub extra: FieldMap,
}

impl Card {
    /// Merge a server-confirmed update into this card. Only fields the
    /// server actually reported are overwritten; everything else survives.
    pub fn merge(&mut self, patch: &CardPatch) {
        if let Some(content) = &patch.content {
            self.content = content.clone();
        }
        if let Some(score) = patch.score {
            self.score = score;
        }
        for (key, value) in &patch.extra {
            self.extra.insert(key.clone(), value.clone());
        }
    }
}

/// Partial card as echoed by the store after a score mutation. Fields the
/// server omitted deserialize to `None` and are left untouched on merge.
#[derive(Debug, Clone, Deserialize)]
pub struct CardPatch {
    pub id: String,
    #[serde(rename = "contenido", default)]
    pub content: Option<FieldMap>,
    #[serde(rename = "aciertos", default)]
    pub score: Option<i64>,
    #[serde(flatten)]
    pub extra: FieldMap,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Deck {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// Deck-level summary as shown on the list screen. The backend always sends
/// `cardCount`; the progress counters are optional extensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub card_count: usize,
    #[serde(default)]
    pub reviewed_count: Option<usize>,
    #[serde(default)]
    pub success_count: Option<usize>,
    #[serde(default)]
    pub to_review_count: Option<usize>,
    #[serde(default)]
    pub pending_points: Option<i64>,
}

impl DeckSummary {
    /// Replace-by-id merge used when a PATCH response carries an updated
    /// summary: reported counters win, absent ones keep their old value.
    pub fn merge(&mut self, update: &DeckSummary) {
        self.name = update.name.clone();
        self.card_count = update.card_count;
        if update.reviewed_count.is_some() {
            self.reviewed_count = update.reviewed_count;
        }
        if update.success_count.is_some() {
            self.success_count = update.success_count;
        }
        if update.to_review_count.is_some() {
            self.to_review_count = update.to_review_count;
        }
        if update.pending_points.is_some() {
            self.pending_points = update.pending_points;
        }
    }
}

/// Body of a successful `PATCH /api/decks/{id}/cards/{card_id}`: the
/// authoritative card, plus an optional refreshed deck summary.
#[derive(Debug, Clone, Deserialize)]
pub struct PatchResponse {
    pub card: CardPatch,
    #[serde(default)]
    pub deck: Option<DeckSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_from_json(json: &str) -> Card {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn card_wire_names_round_trip() {
        let card = card_from_json(
            r#"{"id":"c1","contenido":{"front":"hola","back":"hello"},"aciertos":-2}"#,
        );
        assert_eq!(card.id, "c1");
        assert_eq!(card.score, -2);
        assert_eq!(card.content.get("front").unwrap(), "hola");
    }

    #[test]
    fn content_preserves_field_order() {
        let card = card_from_json(r#"{"id":"c1","contenido":{"z":"1","a":"2","m":"3"}}"#);
        let keys: Vec<&str> = card.content.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn merge_overwrites_only_reported_fields() {
        let mut card = card_from_json(
            r#"{"id":"c1","contenido":{"front":"hola"},"aciertos":0,"note":"local"}"#,
        );
        let patch: CardPatch = serde_json::from_str(r#"{"id":"c1","aciertos":1}"#).unwrap();
        card.merge(&patch);

        assert_eq!(card.score, 1);
        assert_eq!(card.content.get("front").unwrap(), "hola");
        // Client-side extras not echoed by the server survive.
        assert_eq!(card.extra.get("note").unwrap(), "local");
    }

    #[test]
    fn summary_merge_keeps_absent_counters() {
        let mut summary: DeckSummary =
            serde_json::from_str(r#"{"id":"d1","name":"Verbs","cardCount":10,"pendingPoints":3}"#)
                .unwrap();
        let update: DeckSummary =
            serde_json::from_str(r#"{"id":"d1","name":"Verbs","cardCount":10}"#).unwrap();
        summary.merge(&update);
        assert_eq!(summary.pending_points, Some(3));
    }
}
