/// Text tokenization — word and sentence splitting for style analysis.
use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that end a sentence.
pub const SENTENCE_DELIMITERS: &[char] = &['.', '!', '?'];

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Words are maximal runs of word characters; everything else separates them.
pub fn words(text: &str) -> Vec<&str> {
    WORD_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Sentences are the trimmed, non-empty pieces between delimiters.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_DELIMITERS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Number of raw pieces the delimiters cut `text` into, empty pieces included.
pub fn delimiter_segments(text: &str) -> usize {
    text.split(SENTENCE_DELIMITERS).count()
}

/// Sample standard deviation (n − 1 denominator). Zero below two samples.
pub fn sample_std_dev(samples: &[usize]) -> f64 {
    let n = samples.len();
    if n < 2 {
        return 0.0;
    }
    let mean = samples.iter().sum::<usize>() as f64 / n as f64;
    let sum_sq: f64 = samples
        .iter()
        .map(|&x| {
            let d = x as f64 - mean;
            d * d
        })
        .sum();
    (sum_sq / (n - 1) as f64).sqrt()
}
