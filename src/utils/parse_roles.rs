use crate::models::UserRole;

/// Parse `ID:NAME` command-line entries into role references.
/// Malformed entries are skipped.
pub fn parse_role_entries(values: &[String]) -> Vec<UserRole> {
    values
        .iter()
        .filter_map(|v| {
            let (id, name) = v.trim().split_once(':')?;
            let id = id.trim().parse::<i64>().ok()?;
            let name = name.trim();
            if name.is_empty() {
                None
            } else {
                Some(UserRole {
                    id,
                    name: name.to_string(),
                })
            }
        })
        .collect()
}
