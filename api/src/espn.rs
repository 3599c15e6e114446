/// ESPN core API raw wire types — serde shapes for deserializing responses.
/// The core API is reference-linked: most nested fields are `$ref` envelopes
/// that client.rs follows with further fetches before mapping to domain types.
use serde::Deserialize;

/// A reference to another record, e.g. `{"$ref": "https://..."}`.
/// Opaque to callers; only the client dereferences it.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct EspnRef {
    #[serde(rename = "$ref")]
    pub href: String,
}

// ---------------------------------------------------------------------------
// Season events index  (core v2 API)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EventsResponse {
    pub items: Option<Vec<EspnRef>>,
}

// ---------------------------------------------------------------------------
// Event detail → competition → competitor → team chain
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnEventDetail {
    pub id: Option<String>,
    pub name: Option<String>,
    pub week: Option<EspnWeek>,
    pub competitions: Option<Vec<EspnRef>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnWeek {
    pub number: Option<u32>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCompetition {
    pub id: Option<String>,
    pub status: Option<EspnStatus>,
    pub competitors: Option<Vec<EspnCompetitorEntry>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStatus {
    #[serde(rename = "type")]
    pub status_type: Option<EspnStatusType>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStatusType {
    pub name: Option<String>, // "STATUS_SCHEDULED", "STATUS_IN_PROGRESS", "STATUS_FINAL"
    pub completed: Option<bool>,
}

/// A competitor entry inside a competition. The team itself is one more
/// `$ref` hop away; only the side and winner flag are inline.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCompetitorEntry {
    pub id: Option<String>,
    #[serde(rename = "homeAway")]
    pub home_away: Option<String>, // "home" | "away"
    pub winner: Option<bool>,
    pub team: Option<EspnRef>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnTeam {
    pub id: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub abbreviation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ref_envelope_deserializes_dollar_ref_field() {
        let json = r#"{"$ref": "https://example.com/events/1"}"#;
        let r: EspnRef = serde_json::from_str(json).unwrap();
        assert_eq!(r.href, "https://example.com/events/1");
    }

    #[test]
    fn event_detail_tolerates_missing_week_and_competitions() {
        let detail: EspnEventDetail = serde_json::from_str(r#"{"id": "401"}"#).unwrap();
        assert!(detail.week.is_none());
        assert!(detail.competitions.is_none());
    }

    #[test]
    fn competitor_entry_maps_camel_case_side() {
        let json = r#"{"homeAway": "away", "winner": true, "team": {"$ref": "https://example.com/teams/3"}}"#;
        let entry: EspnCompetitorEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.home_away.as_deref(), Some("away"));
        assert_eq!(entry.winner, Some(true));
        assert_eq!(entry.team.unwrap().href, "https://example.com/teams/3");
    }
}
