//! Quick Update Planning
//!
//! Decides what a +/- click has to refresh. The count is patched in place;
//! only a change that moves an item into or out of the inventory (crossing
//! zero) needs the grid membership reloaded.

/// Old and new count of one quick update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountChange {
    pub prior: u32,
    pub next: u32,
}

impl CountChange {
    /// `next = max(0, prior + delta)`
    pub fn apply(prior: u32, delta: i64) -> Self {
        let next = (i64::from(prior) + delta).clamp(0, i64::from(u32::MAX)) as u32;
        Self { prior, next }
    }

    pub fn crosses_zero(&self) -> bool {
        (self.prior == 0) != (self.next == 0)
    }

    pub fn followup(&self) -> Followup {
        if self.crosses_zero() {
            Followup::ReloadMembership
        } else {
            Followup::PatchInPlace
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Followup {
    /// Inventory list and stats reload now
    ReloadMembership,
    /// Text patches only, stats refresh later
    PatchInPlace,
}

/// Inputs that can get keyboard focus back after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Search,
    Filter,
}

impl FocusTarget {
    /// The last used input if it still has text, else the first of
    /// search (with a query), filter (with text), search.
    pub fn resolve(last: Option<FocusTarget>, search_text: &str, filter_text: &str) -> Self {
        let has_query = crate::search::normalize_query(search_text).is_some();
        let has_filter = !filter_text.is_empty();
        match last {
            Some(FocusTarget::Filter) if has_filter => FocusTarget::Filter,
            Some(FocusTarget::Search) if !search_text.is_empty() => FocusTarget::Search,
            _ if has_query => FocusTarget::Search,
            _ if has_filter => FocusTarget::Filter,
            _ => FocusTarget::Search,
        }
    }
}

/// Count typed into the modal field; anything unparsable counts as zero
pub fn parse_count(text: &str) -> i64 {
    text.trim().parse::<i64>().unwrap_or(0)
}

/// Caret position at the end of an input value (UTF-16 units)
pub fn caret_end(value: &str) -> u32 {
    value.encode_utf16().count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_never_negative() {
        let mut count = 2;
        for delta in [-1, -1, -1, -5, 3, -10, 1] {
            let change = CountChange::apply(count, delta);
            assert_eq!(i64::from(change.next), (i64::from(count) + delta).max(0));
            count = change.next;
        }
        assert_eq!(count, 1);
    }

    #[test]
    fn test_zero_crossing_reloads_membership() {
        // Ether: 0 -> 1 shows up in the grid, 1 -> 0 leaves it
        let up = CountChange::apply(0, 1);
        assert_eq!(up.next, 1);
        assert_eq!(up.followup(), Followup::ReloadMembership);

        let down = CountChange::apply(up.next, -1);
        assert_eq!(down.next, 0);
        assert_eq!(down.followup(), Followup::ReloadMembership);
    }

    #[test]
    fn test_same_side_changes_patch_in_place() {
        assert_eq!(CountChange::apply(3, 1).followup(), Followup::PatchInPlace);
        assert_eq!(CountChange::apply(3, -2).followup(), Followup::PatchInPlace);
        // Minus at zero stays at zero
        let change = CountChange::apply(0, -1);
        assert_eq!(change.next, 0);
        assert_eq!(change.followup(), Followup::PatchInPlace);
    }

    #[test]
    fn test_focus_prefers_last_used_input() {
        assert_eq!(FocusTarget::resolve(Some(FocusTarget::Filter), "helm", "pem"), FocusTarget::Filter);
        assert_eq!(FocusTarget::resolve(Some(FocusTarget::Search), "h", "pem"), FocusTarget::Search);
    }

    #[test]
    fn test_focus_fallback_order() {
        assert_eq!(FocusTarget::resolve(Some(FocusTarget::Filter), "helm", ""), FocusTarget::Search);
        assert_eq!(FocusTarget::resolve(None, "h", "pem"), FocusTarget::Filter);
        assert_eq!(FocusTarget::resolve(Some(FocusTarget::Search), "", "pem"), FocusTarget::Filter);
        assert_eq!(FocusTarget::resolve(None, "", ""), FocusTarget::Search);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(" 4 "), 4);
        assert_eq!(parse_count("-2"), -2);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("many"), 0);
    }

    #[test]
    fn test_caret_end_counts_utf16() {
        assert_eq!(caret_end(""), 0);
        assert_eq!(caret_end("helm"), 4);
        assert_eq!(caret_end("Größe"), 5);
        assert_eq!(caret_end("🎮"), 2);
    }
}
