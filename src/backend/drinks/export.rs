//! CSV rendering of a `DrinkMap`.

use crate::shared::DrinkMap;

/// File name offered to clients for the CSV download
pub const CSV_FILE_NAME: &str = "drinks.csv";

/// Render drinks as CSV with a `name,id` header, one row per drink
///
/// Built in memory for each request; nothing touches the filesystem.
pub fn drinks_to_csv(drinks: &DrinkMap) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["name", "id"])?;
    for drink in drinks.values() {
        writer.write_record([drink.name.as_str(), drink.id.as_str()])?;
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Drink;
    use pretty_assertions::assert_eq;

    fn drink(name: &str, id: &str) -> (String, Drink) {
        (
            name.to_string(),
            Drink {
                name: name.to_string(),
                id: id.to_string(),
            },
        )
    }

    fn render(drinks: &DrinkMap) -> String {
        String::from_utf8(drinks_to_csv(drinks).unwrap())
            .unwrap()
            .replace("\r\n", "\n")
    }

    #[test]
    fn test_header_and_rows() {
        let drinks: DrinkMap = [drink("Mojito", "11000"), drink("Negroni", "11003")]
            .into_iter()
            .collect();

        let csv = render(&drinks);
        assert_eq!(csv, "name,id\nMojito,11000\nNegroni,11003\n");
    }

    #[test]
    fn test_names_with_commas_are_quoted() {
        let drinks: DrinkMap = [drink("Rum, Lime & Soda", "42")].into_iter().collect();
        let csv = String::from_utf8(drinks_to_csv(&drinks).unwrap()).unwrap();
        assert!(csv.contains("\"Rum, Lime & Soda\",42"));
    }

    #[test]
    fn test_empty_still_has_header() {
        let csv = render(&DrinkMap::new());
        assert_eq!(csv, "name,id\n");
    }
}
