use super::vulnerability_record::VulnerabilityRecord;

/// Count of records per severity label, in first-seen order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeverityTally {
    counts: Vec<(String, usize)>,
}

impl SeverityTally {
    pub fn from_records(records: &[VulnerabilityRecord]) -> Self {
        let mut tally = Self::default();
        for record in records {
            tally.add(record.severity_label());
        }
        tally
    }

    pub fn add(&mut self, label: &str) {
        match self.counts.iter_mut().find(|(seen, _)| seen == label) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((label.to_string(), 1)),
        }
    }

    pub fn get(&self, label: &str) -> usize {
        self.counts
            .iter()
            .find(|(seen, _)| seen == label)
            .map_or(0, |(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl std::fmt::Display for SeverityTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(label, count)| format!("{}:{}", label, count))
            .collect();
        write!(f, "{} vulnerabilities ({})", self.total(), parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_severity(severity: Option<&str>) -> VulnerabilityRecord {
        VulnerabilityRecord {
            id: None,
            severity: severity.map(str::to_string),
            package: None,
            version: None,
            fixed_version: None,
            title: None,
            description: String::new(),
        }
    }

    #[test]
    fn test_first_seen_order() {
        let records = vec![
            with_severity(Some("LOW")),
            with_severity(Some("CRITICAL")),
            with_severity(Some("LOW")),
            with_severity(Some("MEDIUM")),
            with_severity(Some("CRITICAL")),
        ];

        let tally = SeverityTally::from_records(&records);
        let ordered: Vec<(&str, usize)> = tally.iter().collect();

        assert_eq!(ordered, vec![("LOW", 2), ("CRITICAL", 2), ("MEDIUM", 1)]);
        assert_eq!(tally.total(), records.len());
    }

    #[test]
    fn test_missing_severity_counted_as_unknown() {
        let records = vec![with_severity(None), with_severity(Some("HIGH")), with_severity(None)];
        let tally = SeverityTally::from_records(&records);

        assert_eq!(tally.get("UNKNOWN"), 2);
        assert_eq!(tally.get("HIGH"), 1);
        assert_eq!(tally.get("LOW"), 0);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_empty_tally() {
        let tally = SeverityTally::from_records(&[]);
        assert!(tally.is_empty());
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.to_string(), "0 vulnerabilities ()");
    }

    #[test]
    fn test_display() {
        let records = vec![with_severity(Some("HIGH")), with_severity(Some("LOW"))];
        let tally = SeverityTally::from_records(&records);
        assert_eq!(tally.to_string(), "2 vulnerabilities (HIGH:1 LOW:1)");
    }
}
