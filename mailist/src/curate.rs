//! Curation transforms
//!
//! [`pipeline`] runs the full curation pass: collapse duplicate addresses,
//! split display names, derive country codes. The two per-row transforms
//! are plain iterator adapters, single-pass and order-preserving;
//! deduplication is necessarily eager since it needs the whole key set.

use indexmap::IndexMap;

use crate::config::COUNTRY_FALLBACK;
use crate::contacts::ContactRow;

/// Collapse rows sharing an `Email` value.
///
/// Keyed replace preserving final position: the surviving row carries the
/// **last** occurrence's field values but sits at the **first-seen**
/// position of its address. Rows with distinct addresses keep their
/// relative order.
#[must_use]
pub fn dedup_by_email<I>(rows: I) -> Vec<ContactRow>
where
    I: IntoIterator<Item = ContactRow>,
{
    let mut by_email: IndexMap<String, ContactRow> = IndexMap::new();
    for row in rows {
        // IndexMap::insert replaces the value but keeps the key's position.
        by_email.insert(row.email.clone(), row);
    }
    by_email.into_values().collect()
}

/// Split `Nome` on the first space into `FirstName` and `Surname`.
///
/// No space means the whole name is the first name and the surname is
/// empty.
pub fn split_names<I>(rows: I) -> impl Iterator<Item = ContactRow>
where
    I: Iterator<Item = ContactRow>,
{
    rows.map(|mut row| {
        match row.nome.split_once(' ') {
            Some((first, rest)) => {
                row.first_name = first.to_string();
                row.surname = rest.to_string();
            }
            None => {
                row.first_name = row.nome.clone();
                row.surname = String::new();
            }
        }
        row
    })
}

/// Fill `Country` from each row's address TLD.
pub fn derive_country<I>(rows: I) -> impl Iterator<Item = ContactRow>
where
    I: Iterator<Item = ContactRow>,
{
    rows.map(|mut row| {
        row.country = country_for(&row.email).to_string();
        row
    })
}

/// Country-code heuristic: the text after the last `.` of the address,
/// kept as-is (case preserved) when it is exactly 2 characters, else the
/// fixed fallback. No address-format validation; an address without a dot
/// makes the whole address the candidate segment.
#[must_use]
pub fn country_for(email: &str) -> &str {
    let tld = email.rsplit('.').next().unwrap_or(email);
    if tld.chars().count() == 2 {
        tld
    } else {
        COUNTRY_FALLBACK
    }
}

/// The full curation pass, in order: dedup, name split, country.
pub fn pipeline<I>(rows: I) -> impl Iterator<Item = ContactRow>
where
    I: IntoIterator<Item = ContactRow>,
{
    derive_country(split_names(dedup_by_email(rows).into_iter()))
}

/// Keep only rows carrying the given country code.
pub fn filter_country<'a, I>(rows: I, code: &'a str) -> impl Iterator<Item = ContactRow> + 'a
where
    I: Iterator<Item = ContactRow> + 'a,
{
    rows.filter(move |row| row.country == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(nome: &str, email: &str) -> ContactRow {
        ContactRow {
            nome: nome.to_string(),
            first_name: String::new(),
            surname: String::new(),
            email: email.to_string(),
            country: String::new(),
        }
    }

    #[test]
    fn test_dedup_keeps_last_values_at_first_seen_position() {
        let rows = vec![
            row("X", "a@foo.br"),
            row("Middle", "b@foo.br"),
            row("Y", "a@foo.br"),
        ];

        let deduped = dedup_by_email(rows);

        assert_eq!(deduped.len(), 2);
        // a@foo.br keeps its first-seen position but carries the last values
        assert_eq!(deduped[0].email, "a@foo.br");
        assert_eq!(deduped[0].nome, "Y");
        assert_eq!(deduped[1].email, "b@foo.br");
    }

    #[test]
    fn test_dedup_without_duplicates_is_identity() {
        let rows = vec![row("A", "a@foo.br"), row("B", "b@foo.br")];

        assert_eq!(dedup_by_email(rows.clone()), rows);
    }

    #[test]
    fn test_split_on_first_space_only() {
        let split: Vec<_> = split_names(vec![row("Maria Silva Santos", "m@foo.br")].into_iter()).collect();

        assert_eq!(split[0].first_name, "Maria");
        assert_eq!(split[0].surname, "Silva Santos");
    }

    #[test]
    fn test_split_single_name_has_empty_surname() {
        let split: Vec<_> = split_names(vec![row("Ana", "a@foo.br")].into_iter()).collect();

        assert_eq!(split[0].first_name, "Ana");
        assert_eq!(split[0].surname, "");
    }

    #[test]
    fn test_country_two_letter_tld_used_as_is() {
        assert_eq!(country_for("x@foo.uk"), "uk");
        // Case is preserved, not normalized
        assert_eq!(country_for("x@foo.UK"), "UK");
    }

    #[test]
    fn test_country_falls_back_on_long_tld() {
        assert_eq!(country_for("x@foo.com"), "br");
    }

    #[test]
    fn test_country_falls_back_without_dot() {
        assert_eq!(country_for("x@foo"), "br");
    }

    #[test]
    fn test_filter_country_excludes_other_codes() {
        let mut keep = row("A", "a@foo.br");
        keep.country = "br".to_string();
        let mut drop = row("B", "b@foo.uk");
        drop.country = "uk".to_string();

        let kept: Vec<_> = filter_country(vec![keep, drop].into_iter(), "br").collect();

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].email, "a@foo.br");
    }

    #[test]
    fn test_pipeline_order_dedup_then_transforms() {
        let rows = vec![row("Ana Lima", "ana@foo.br"), row("Ana Souza", "ana@foo.br")];

        let curated: Vec<_> = pipeline(rows).collect();

        assert_eq!(curated.len(), 1);
        // Last duplicate wins before the name split runs
        assert_eq!(curated[0].first_name, "Ana");
        assert_eq!(curated[0].surname, "Souza");
        assert_eq!(curated[0].country, "br");
    }
}
