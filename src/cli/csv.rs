use ipdupcheck::{DuplicateReport, Result};
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Save Duplicate Check Results to CSV File
-------------------------------------------------------------------------------------------------*/

pub fn save(report: &DuplicateReport, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    // Write header
    writer.serialize([
        "Address",
        "Interface Inventory",
        "Host Inventory",
        "Duplicate",
    ])?;

    // Write address records
    for address in &report.addresses {
        let record = (
            address.candidate.token(),
            address.interface.to_string(),
            address.host.to_string(),
            address.is_duplicate(),
        );
        writer.serialize(record)?;
    }

    writer.flush()?;

    Ok(())
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use ipdupcheck::{parse_candidate, AddressReport, Location, LookupOutcome};
    use std::fs;

    #[test]
    fn test_save_report() {
        let report = DuplicateReport {
            addresses: vec![
                AddressReport {
                    candidate: parse_candidate("10.1.1.1").unwrap(),
                    interface: LookupOutcome::Found(Location::new("sw1", "Gi1/0/1")),
                    host: LookupOutcome::NotFound,
                },
                AddressReport {
                    candidate: parse_candidate("203.0.113.5").unwrap(),
                    interface: LookupOutcome::LookupError("HTTP 500".to_string()),
                    host: LookupOutcome::NotFound,
                },
            ],
        };

        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("report.csv");
        save(&report, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            [
                "Address,Interface Inventory,Host Inventory,Duplicate",
                "10.1.1.1,sw1 Gi1/0/1,not found,true",
                "203.0.113.5,lookup failed: HTTP 500,not found,false",
            ]
        );
    }
}
