//! Shopping list generation.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::catalog::Catalog;

/// Errors from shopping list generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// More items were requested than the catalog contains.
    #[error("Requested {requested} items but the catalog only has {available}")]
    ListTooLong { requested: usize, available: usize },
}

/// Draw `count` distinct item names uniformly at random from the catalog.
///
/// The returned order is random too, so repeated calls produce different
/// lists. The catalog itself is never mutated. Requesting more items than
/// the catalog holds is an error rather than a silent truncation.
pub fn generate_shopping_list(
    catalog: &Catalog,
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<String>, SessionError> {
    if count > catalog.len() {
        return Err(SessionError::ListTooLong {
            requested: count,
            available: catalog.len(),
        });
    }

    let mut names: Vec<String> = catalog.names().map(String::from).collect();
    names.shuffle(rng);
    names.truncate(count);
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn list_has_requested_count_of_distinct_catalog_names() {
        let catalog = Catalog::default();
        let mut rng = StdRng::seed_from_u64(7);

        for count in [0, 1, 8, catalog.len()] {
            let list = generate_shopping_list(&catalog, count, &mut rng).unwrap();
            assert_eq!(list.len(), count);

            let unique: HashSet<&String> = list.iter().collect();
            assert_eq!(unique.len(), count, "list contains a duplicate");

            let names: HashSet<&str> = catalog.names().collect();
            for item in &list {
                assert!(names.contains(item.as_str()), "{item} not in catalog");
            }
        }
    }

    #[test]
    fn oversized_request_is_an_error() {
        let catalog = Catalog::default();
        let mut rng = StdRng::seed_from_u64(7);

        let result = generate_shopping_list(&catalog, catalog.len() + 1, &mut rng);
        assert_eq!(
            result,
            Err(SessionError::ListTooLong {
                requested: catalog.len() + 1,
                available: catalog.len(),
            })
        );
    }

    #[test]
    fn repeated_draws_can_differ() {
        let catalog = Catalog::default();
        let mut rng = StdRng::seed_from_u64(7);

        // With 25 items choose 8, a hundred identical draws in a row would
        // mean the generator is caching.
        let first = generate_shopping_list(&catalog, 8, &mut rng).unwrap();
        let differs = (0..100).any(|_| {
            generate_shopping_list(&catalog, 8, &mut rng).unwrap() != first
        });
        assert!(differs);
    }
}
