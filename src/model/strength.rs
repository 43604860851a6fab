use derive_more::Display;
use crate::db::common_passwords::CommonPasswordList;
use super::entropy::estimate_entropy;

const MIN_LENGTH: usize = 12;
const COMMON_PASSWORD_PENALTY: i32 = 30;

#[derive(Clone, Copy, Debug, Display, PartialEq)]
pub enum StrengthLabel {
    Weak,
    Moderate,
    Strong,
}

impl StrengthLabel {
    pub fn from_score(score: i32) -> Self {
        if score < 40 {
            StrengthLabel::Weak
        } else if score < 70 {
            StrengthLabel::Moderate
        } else {
            StrengthLabel::Strong
        }
    }
}

///
/// The result of scoring a candidate password.
///
/// The feedback items are ordered - length first, then the character classes,
/// then the common-password note - and only the unmet checks appear.
///
#[derive(Clone, Debug)]
pub struct StrengthReport {
    pub score: i32,
    pub entropy: f64,
    pub feedback: Vec<String>,
}

impl StrengthReport {
    pub fn label(&self) -> StrengthLabel {
        StrengthLabel::from_score(self.score)
    }

    pub fn is_strong(&self) -> bool {
        self.label() == StrengthLabel::Strong
    }
}

///
/// Score the candidate password against the composition checks and the
/// known-weak password list.
///
/// Each check is independent and additive - a password can satisfy every
/// composition rule and still be penalised for appearing in the common list,
/// which may push the score negative. The entropy estimate is reported
/// alongside the score but never contributes to it.
///
pub fn score_password(password: &str, common: &CommonPasswordList) -> StrengthReport {
    let mut score = 0;
    let mut feedback = vec![];

    if password.chars().count() >= MIN_LENGTH {
        score += 25;
    } else {
        feedback.push("Use at least 12 characters.".to_string());
    }

    if password.chars().any(|c| c.is_lowercase()) {
        score += 15;
    } else {
        feedback.push("Add lowercase letters.".to_string());
    }

    if password.chars().any(|c| c.is_uppercase()) {
        score += 15;
    } else {
        feedback.push("Add uppercase letters.".to_string());
    }

    if password.chars().any(|c| c.is_numeric()) {
        score += 15;
    } else {
        feedback.push("Add numbers.".to_string());
    }

    if password.chars().any(|c| !c.is_alphanumeric()) {
        score += 15;
    } else {
        feedback.push("Add special characters.".to_string());
    }

    if common.is_common(password) {
        score -= COMMON_PASSWORD_PENALTY;
        feedback.push("This is a very common password.".to_string());
    }

    StrengthReport { score, entropy: estimate_entropy(password), feedback }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn no_common_list() -> CommonPasswordList {
        CommonPasswordList::new("no/such/list.txt")
    }

    #[test]
    fn test_all_checks_met_scores_85() {
        let report = score_password("Sn0w!leopard99", &no_common_list());
        assert_eq!(report.score, 85);
        assert_eq!(report.label(), StrengthLabel::Strong);
        assert!(report.feedback.is_empty());
    }

    #[test]
    fn test_common_lowercase_password_goes_negative() -> Result<(), std::io::Error> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("common_passwords.txt");
        fs::write(&path, "password\n123456\n")?;

        // 'password' earns 15 for lowercase only, then loses 30 for being common.
        let report = score_password("password", &CommonPasswordList::new(&path));
        assert_eq!(report.score, -15);
        assert_eq!(report.label(), StrengthLabel::Weak);
        assert_eq!(report.feedback, vec![
            "Use at least 12 characters.",
            "Add uppercase letters.",
            "Add numbers.",
            "Add special characters.",
            "This is a very common password.",
        ]);
        Ok(())
    }

    #[test]
    fn test_empty_password_gets_every_composition_hint() {
        let report = score_password("", &no_common_list());
        assert_eq!(report.score, 0);
        assert_eq!(report.entropy, 0.);
        assert_eq!(report.feedback, vec![
            "Use at least 12 characters.",
            "Add lowercase letters.",
            "Add uppercase letters.",
            "Add numbers.",
            "Add special characters.",
        ]);
    }

    #[test]
    fn test_feedback_order_is_fixed() {
        // Upper-case digits only - missing lowercase and specials and too short.
        let report = score_password("ABC123", &no_common_list());
        assert_eq!(report.feedback, vec![
            "Use at least 12 characters.",
            "Add lowercase letters.",
            "Add special characters.",
        ]);
        assert_eq!(report.score, 30);
        assert_eq!(report.label(), StrengthLabel::Weak);
    }

    #[test]
    fn test_moderate_band() {
        // Length + lower + digits = 55.
        let report = score_password("abcdefgh1234", &no_common_list());
        assert_eq!(report.score, 55);
        assert_eq!(report.label(), StrengthLabel::Moderate);
    }

    #[test]
    fn test_label_boundaries() {
        assert_eq!(StrengthLabel::from_score(39), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(40), StrengthLabel::Moderate);
        assert_eq!(StrengthLabel::from_score(69), StrengthLabel::Moderate);
        assert_eq!(StrengthLabel::from_score(70), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(-15), StrengthLabel::Weak);
    }

    #[test]
    fn test_common_penalty_does_not_suppress_composition_hints() -> Result<(), std::io::Error> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("common_passwords.txt");
        fs::write(&path, "Sn0w!leopard99\n")?;

        // Every composition check passes, the only feedback is the common note.
        let report = score_password("Sn0w!leopard99", &CommonPasswordList::new(&path));
        assert_eq!(report.score, 55);
        assert_eq!(report.label(), StrengthLabel::Moderate);
        assert_eq!(report.feedback, vec!["This is a very common password."]);
        Ok(())
    }
}
