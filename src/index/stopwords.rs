/// Common English function words excluded from the vocabulary.
/// Sorted so membership checks can binary-search.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "again", "against", "all",
    "along", "also", "am", "among", "an", "and", "another", "any",
    "are", "around", "as", "at", "back", "be", "because", "been",
    "before", "behind", "being", "below", "beneath", "beside", "between", "beyond",
    "both", "but", "by", "can", "could", "did", "do", "does",
    "doing", "down", "during", "each", "even", "ever", "every", "few",
    "for", "from", "get", "give", "go", "got", "had", "has",
    "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "inside", "into",
    "is", "it", "its", "itself", "just", "made", "make", "may",
    "me", "might", "more", "most", "much", "must", "my", "myself",
    "near", "neither", "no", "none", "not", "now", "of", "off",
    "on", "one", "only", "onto", "or", "other", "ought", "our",
    "ours", "ourselves", "out", "outside", "over", "own", "same", "say",
    "see", "several", "shall", "she", "should", "since", "so", "some",
    "such", "take", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "though",
    "through", "throughout", "to", "too", "toward", "under", "underneath", "unless",
    "until", "up", "upon", "very", "was", "way", "we", "were",
    "what", "when", "where", "which", "while", "who", "whom", "whose",
    "why", "will", "with", "within", "without", "would", "you", "your",
    "yours", "yourself", "yourselves",
];

pub fn is_stop_word(term: &str) -> bool {
    ENGLISH_STOP_WORDS.binary_search(&term).is_ok()
}
