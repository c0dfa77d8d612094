//! Role resolution over column metadata.

use timeline_model::{ColumnDescriptor, Role};

/// Role→column indices resolved for one update cycle.
///
/// When several columns carry the same role flag, the last scanned column
/// wins: each match overwrites the slot. This mirrors the long-standing
/// host behavior and is pinned by tests; change it deliberately or not at
/// all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleMap {
    pub date: Option<usize>,
    pub event: Option<usize>,
    pub description: Option<usize>,
    pub color: Option<usize>,
    pub symbol: Option<usize>,
}

impl RoleMap {
    /// Scans the column descriptors once and records, per role, the index
    /// of the last column carrying it.
    pub fn resolve(columns: &[ColumnDescriptor]) -> Self {
        let mut map = Self::default();
        for (index, column) in columns.iter().enumerate() {
            for role in Role::ALL {
                if column.has_role(role) {
                    map.set(role, index);
                }
            }
        }
        map
    }

    pub fn index(&self, role: Role) -> Option<usize> {
        match role {
            Role::Date => self.date,
            Role::Event => self.event,
            Role::Description => self.description,
            Role::Color => self.color,
            Role::Symbol => self.symbol,
        }
    }

    pub fn is_resolved(&self, role: Role) -> bool {
        self.index(role).is_some()
    }

    fn set(&mut self, role: Role, index: usize) {
        match role {
            Role::Date => self.date = Some(index),
            Role::Event => self.event = Some(index),
            Role::Description => self.description = Some(index),
            Role::Color => self.color = Some(index),
            Role::Symbol => self.symbol = Some(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, roles: &[Role]) -> ColumnDescriptor {
        roles
            .iter()
            .fold(ColumnDescriptor::new(name), |column, &role| {
                column.with_role(role)
            })
    }

    #[test]
    fn resolves_each_role_to_its_column() {
        let columns = vec![
            column("when", &[Role::Date]),
            column("what", &[Role::Event, Role::Description]),
            column("category", &[Role::Color]),
        ];
        let map = RoleMap::resolve(&columns);
        assert_eq!(map.date, Some(0));
        assert_eq!(map.event, Some(1));
        assert_eq!(map.description, Some(1));
        assert_eq!(map.color, Some(2));
        assert_eq!(map.symbol, None);
    }

    #[test]
    fn last_column_wins_on_duplicate_roles() {
        let columns = vec![
            column("first_date", &[Role::Date]),
            column("second_date", &[Role::Date]),
        ];
        let map = RoleMap::resolve(&columns);
        assert_eq!(map.date, Some(1));
    }
}
