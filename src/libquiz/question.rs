use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub(crate) struct Question {
    #[serde(rename = "image_name")]
    pub image_tag: String,
    pub hint: String,
    pub answer: String,
}

impl Question {
    /// Random landscape picture matching the image tag.
    pub fn image_url(&self) -> String {
        format!(
            "https://source.unsplash.com/random/1920x1080/?{}&orientation=landscape",
            self.image_tag
        )
    }

    pub fn is_answer(&self, guess: &str) -> bool {
        guess.trim().to_lowercase() == self.answer.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris() -> Question {
        Question {
            image_tag: "eiffel".to_string(),
            hint: "City of light".to_string(),
            answer: "Paris".to_string(),
        }
    }

    #[test]
    fn answer_ignores_case_and_padding() {
        let question = paris();
        assert!(question.is_answer("PARIS"));
        assert!(question.is_answer("paris"));
        assert!(question.is_answer("  Paris\r"));
        assert!(!question.is_answer("Pari"));
        assert!(!question.is_answer("London"));
    }

    #[test]
    fn padded_answer_still_matches() {
        let question = Question {
            answer: " Paris ".to_string(),
            ..paris()
        };
        assert!(question.is_answer("Paris "));
        assert!(question.is_answer("paris"));
        assert!(!question.is_answer("Pa ris"));
    }

    #[test]
    fn image_url_embeds_tag() {
        assert_eq!(
            paris().image_url(),
            "https://source.unsplash.com/random/1920x1080/?eiffel&orientation=landscape"
        );
    }

    #[test]
    fn equality_is_by_all_fields() {
        let mut other = paris();
        assert_eq!(paris(), other);
        other.hint = "Capital of France".to_string();
        assert_ne!(paris(), other);
    }
}
