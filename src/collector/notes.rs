//! DxDiag Notes section: keep only the notes that report a problem.

const PROBLEM: &str = "There is a problem";

pub fn collect_notes(body: &[&str]) -> Vec<String> {
    body.iter()
        .filter_map(|line| line.split_once(':'))
        .map(|(_, message)| message.trim())
        .filter(|message| message.starts_with(PROBLEM))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_problem_notes_only() {
        let body = [
            "Display Tab 1: No problems found.",
            "Sound Tab 1: There is a problem with Realtek Audio device. Reinstall the driver.",
            "Input Tab: No problems found.",
            "Display Tab 2: There is a problem: device is disabled.",
            "no colon here",
        ];
        assert_eq!(
            collect_notes(&body),
            vec![
                "There is a problem with Realtek Audio device. Reinstall the driver.",
                "There is a problem: device is disabled.",
            ]
        );
    }

    #[test]
    fn empty_body_has_no_notes() {
        assert!(collect_notes(&[]).is_empty());
    }
}
