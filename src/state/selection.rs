use crate::model::RegionId;
use serde::{Deserialize, Serialize};

// Exclusive region selection
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub region: Option<RegionId>,
}

impl Selection {
    /// Replaces any prior selection.
    pub fn select(&mut self, id: RegionId) {
        self.region = Some(id);
    }

    pub fn clear(&mut self) {
        self.region = None;
    }

    pub fn is_selected(&self, id: &RegionId) -> bool {
        self.region.as_ref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_select_replaces_first() {
        let mut s = Selection::default();
        let (a, b) = (RegionId::new("85001"), RegionId::new("85002"));
        s.select(a.clone());
        s.select(b.clone());
        assert_eq!(s.region, Some(b.clone()));
        assert!(!s.is_selected(&a));
        assert!(s.is_selected(&b));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut s = Selection::default();
        s.clear();
        assert_eq!(s.region, None);
        s.select(RegionId::new("99504"));
        s.clear();
        s.clear();
        assert_eq!(s.region, None);
    }
}
