//! Display sequence numbers

use std::collections::HashMap;

use crate::types::Domain;

/// Number the working set `1..=N` by id order.
///
/// The numbering only depends on which ids are present, so reordering the input
/// never changes it; adding or removing a record can.
pub fn assign_display_index(domains: &[Domain]) -> HashMap<String, usize> {
    let mut ids: Vec<&str> = domains.iter().map(|d| d.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();

    ids.into_iter()
        .enumerate()
        .map(|(i, id)| (id.to_string(), i + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::status::{DomainStatus, classify};

    fn domain(id: &str, expire: Option<NaiveDate>) -> Domain {
        Domain {
            id: id.into(),
            name: format!("{id}.com"),
            expire_date: expire,
            company: "GFC SP. Z.O.O".into(),
            registrar: String::new(),
            resignation: false,
            archived: false,
        }
    }

    #[test]
    fn numbers_by_id() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let list = vec![
            domain("b", NaiveDate::from_ymd_opt(2099, 1, 1)),
            domain("a", None),
        ];
        let index = assign_display_index(&list);
        assert_eq!(index["a"], 1);
        assert_eq!(index["b"], 2);
        assert_eq!(classify(&list[1], today), DomainStatus::Requested);
        assert_eq!(classify(&list[0], today), DomainStatus::Active);
    }

    #[test]
    fn permutation_invariant() {
        let list = vec![domain("c", None), domain("a", None), domain("b", None)];
        let mut reversed = list.clone();
        reversed.reverse();
        assert_eq!(assign_display_index(&list), assign_display_index(&reversed));
    }

    #[test]
    fn membership_changes_renumber() {
        let list = vec![domain("a", None), domain("c", None)];
        assert_eq!(assign_display_index(&list)["c"], 2);

        let grown = vec![domain("a", None), domain("b", None), domain("c", None)];
        assert_eq!(assign_display_index(&grown)["c"], 3);
    }

    #[test]
    fn empty_set() {
        assert!(assign_display_index(&[]).is_empty());
    }
}
