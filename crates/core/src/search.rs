//! Name search over a user collection

use crate::models::User;

/// Case-insensitive substring match on the name.
/// An absent or empty query returns every user.
pub fn filter_by_name(users: Vec<User>, query: Option<&str>) -> Vec<User> {
    let needle = match query {
        Some(q) if !q.is_empty() => q.to_lowercase(),
        _ => return users,
    };

    users
        .into_iter()
        .filter(|user| user.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users(names: &[&str]) -> Vec<User> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| User::new(i as i32 + 1, *name))
            .collect()
    }

    #[test]
    fn test_case_insensitive_match() {
        let result = filter_by_name(users(&["Alice", "ALICE-2", "Bob"]), Some("ali"));
        let names: Vec<_> = result.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "ALICE-2"]);
    }

    #[test]
    fn test_absent_query_returns_all() {
        assert_eq!(filter_by_name(users(&["Alice", "Bob"]), None).len(), 2);
        assert_eq!(filter_by_name(users(&["Alice", "Bob"]), Some("")).len(), 2);
    }

    #[test]
    fn test_no_match() {
        assert!(filter_by_name(users(&["Alice", "Bob"]), Some("zed")).is_empty());
    }
}
