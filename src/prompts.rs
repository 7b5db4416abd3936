//! Fixed system instructions sent with every inference call.

/// Instruction for the language detection call.
///
/// The model must answer with a single English language name and fall back
/// to "English" for input that is not real text in any language.
pub const CLASSIFICATION_CONTEXT: &str = r#"You are a language identifier.
Your task is to detect the primary language of the given text input and respond only with the English name of that language.
Do not translate or explain. Do not guess based on previous examples--decide only from the current input.
If the text appears to be random characters, symbols, or nonsense, respond with "English".

Output should be a single word

Examples:
INPUT: Bonjour, je m'appelle Bel-Ami
OUTPUT: French

INPUT: Können Sie mir bitte helfen?
OUTPUT: German

INPUT: %#$%#%#%#%#%@#!#!@#
OUTPUT: English
"#;

/// Instruction for the translation call, with two worked examples for style.
pub const TRANSLATION_CONTEXT: &str = r#"You are a translation model. Your only task is to translate any non-English input into natural, fluent English.
Do not interpret or paraphrase.

Example:
INPUT: Bonjour, je m'appelle Bel-Ami
OUTPUT: Hello, my name is Bel-Ami

INPUT: Il fait très chaud aujourd'hui, n'est-ce pas ?
OUTPUT: It is very hot today, isn't it?
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_context_rules() {
        assert!(CLASSIFICATION_CONTEXT.contains("language identifier"));
        assert!(CLASSIFICATION_CONTEXT.contains("English name of that language"));
        assert!(CLASSIFICATION_CONTEXT.contains("Do not translate or explain"));
        assert!(CLASSIFICATION_CONTEXT.contains("decide only from the current input"));
        assert!(CLASSIFICATION_CONTEXT.contains("respond with \"English\""));
        assert!(CLASSIFICATION_CONTEXT.contains("single word"));
    }

    #[test]
    fn test_classification_context_examples() {
        assert!(CLASSIFICATION_CONTEXT.contains("OUTPUT: French"));
        assert!(CLASSIFICATION_CONTEXT.contains("OUTPUT: German"));
        assert!(CLASSIFICATION_CONTEXT.contains("OUTPUT: English"));
    }

    #[test]
    fn test_translation_context_rules() {
        assert!(TRANSLATION_CONTEXT.contains("natural, fluent English"));
        assert!(TRANSLATION_CONTEXT.contains("Do not interpret or paraphrase"));
    }

    #[test]
    fn test_translation_context_has_two_examples() {
        assert_eq!(TRANSLATION_CONTEXT.matches("INPUT:").count(), 2);
        assert!(TRANSLATION_CONTEXT.contains("Hello, my name is Bel-Ami"));
        assert!(TRANSLATION_CONTEXT.contains("It is very hot today, isn't it?"));
    }

    #[test]
    fn test_contexts_differ() {
        assert_ne!(CLASSIFICATION_CONTEXT, TRANSLATION_CONTEXT);
    }
}
