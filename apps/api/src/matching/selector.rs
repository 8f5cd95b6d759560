//! Relevance Selector: ranks resume chunks against a job description by keyword overlap.
//!
//! Score = Jaccard(job, chunk) + 0.3 * (matched / job keywords), capped at 1.0.
//! Ties keep original chunk order.

use tracing::{info, warn};

use crate::matching::keywords::{extract_keywords, KeywordSet, MIN_KEYWORD_LEN};

/// Weight of the coverage bonus added on top of Jaccard similarity.
const COVERAGE_BONUS: f64 = 0.3;

/// A chunk paired with its relevance score. Only lives for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredChunk<'a> {
    pub score: f64,
    pub chunk: &'a str,
}

/// Returns at most `k` chunks, most relevant to `job_description` first.
///
/// When there are no more than `k` chunks they come back untouched, and a job
/// description without usable keywords falls back to the first `k` chunks.
pub fn select_relevant_chunks(chunks: &[String], job_description: &str, k: usize) -> Vec<String> {
    if chunks.len() <= k {
        return chunks.to_vec();
    }

    let job_keywords = extract_keywords(job_description, MIN_KEYWORD_LEN);
    if job_keywords.is_empty() {
        warn!("No keywords extracted from job description, returning first chunks");
        return chunks[..k].to_vec();
    }

    let selected: Vec<String> = rank_chunks(chunks, &job_keywords)
        .into_iter()
        .take(k)
        .map(|scored| scored.chunk.to_string())
        .collect();

    info!(
        "Selected {} chunks from {} using keyword matching",
        selected.len(),
        chunks.len()
    );

    selected
}

/// Scores every chunk and sorts by descending score. The sort is stable.
pub fn rank_chunks<'a>(chunks: &'a [String], job_keywords: &KeywordSet) -> Vec<ScoredChunk<'a>> {
    let mut scored: Vec<ScoredChunk<'a>> = chunks
        .iter()
        .map(|chunk| ScoredChunk {
            score: score_chunk(chunk, job_keywords),
            chunk,
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

/// Relevance of one chunk to the job keywords, in `[0.0, 1.0]`.
pub fn score_chunk(chunk: &str, job_keywords: &KeywordSet) -> f64 {
    if job_keywords.is_empty() {
        return 0.0;
    }

    let chunk_keywords = extract_keywords(chunk, MIN_KEYWORD_LEN);
    if chunk_keywords.is_empty() {
        return 0.0;
    }

    let overlap = job_keywords.intersection(&chunk_keywords).count();
    let union = job_keywords.union(&chunk_keywords).count();

    let mut score = overlap as f64 / union as f64;
    if overlap > 0 {
        score += (overlap as f64 / job_keywords.len() as f64) * COVERAGE_BONUS;
    }

    score.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::chunker::{chunk_text, ChunkPolicy};

    const KEYWORD_TERMS: [&str; 3] = ["kubernetes", "golang", "distributed"];

    fn chunks(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    fn keywords(words: &[&str]) -> KeywordSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn mentions_keyword(chunk: &str) -> bool {
        let lowered = chunk.to_lowercase();
        KEYWORD_TERMS.iter().any(|kw| lowered.contains(kw))
    }

    #[test]
    fn test_passthrough_when_k_covers_all_chunks() {
        let input = chunks(&["zeta", "alpha", "beta"]);
        assert_eq!(select_relevant_chunks(&input, "kubernetes golang", 3), input);
        assert_eq!(select_relevant_chunks(&input, "kubernetes golang", 10), input);
    }

    #[test]
    fn test_no_job_keywords_returns_first_k() {
        let input = chunks(&["one chunk", "two chunk", "three chunk", "four chunk"]);
        let selected = select_relevant_chunks(&input, "a an the of it", 2);
        assert_eq!(selected, chunks(&["one chunk", "two chunk"]));
    }

    #[test]
    fn test_result_size_bounded_by_k() {
        let input: Vec<String> = (0..12).map(|i| format!("golang service number {i}")).collect();
        for k in [0, 1, 5, 11] {
            let selected = select_relevant_chunks(&input, "golang services", k);
            assert_eq!(selected.len(), k.min(input.len()));
        }
    }

    #[test]
    fn test_empty_chunks_select_nothing() {
        assert!(select_relevant_chunks(&[], "golang services", 5).is_empty());
    }

    #[test]
    fn test_ties_keep_original_order() {
        let input = chunks(&["delta", "alpha rust", "beta rust", "gamma rust"]);
        let selected = select_relevant_chunks(&input, "rust developer", 2);
        assert_eq!(selected, chunks(&["alpha rust", "beta rust"]));
    }

    #[test]
    fn test_score_is_jaccard_plus_coverage_bonus() {
        let job = keywords(&KEYWORD_TERMS);
        // chunk keywords: {kubernetes, operator, golang}; overlap 2, union 4
        let score = score_chunk("Kubernetes operator in Golang", &job);
        let expected = 2.0 / 4.0 + (2.0 / 3.0) * 0.3;
        assert!((score - expected).abs() < 1e-9, "Score was {score}");
    }

    #[test]
    fn test_score_is_capped_at_one() {
        let job = keywords(&["golang", "kubernetes"]);
        assert_eq!(score_chunk("golang kubernetes", &job), 1.0);
    }

    #[test]
    fn test_score_zero_without_chunk_keywords_or_overlap() {
        let job = keywords(&["golang"]);
        assert_eq!(score_chunk("a b c 123", &job), 0.0);
        assert_eq!(score_chunk("spreadsheets and budgets", &job), 0.0);
    }

    #[test]
    fn test_relevant_chunks_outrank_unrelated_in_long_resume() {
        let filler = "Maintained internal tooling for the finance team and wrote weekly reports. ";
        let mut resume = String::new();
        while resume.len() < 2_000 {
            resume.push_str(filler);
        }
        resume.push_str("\n\nBuilt distributed Golang services on Kubernetes for payments.\n\n");
        while resume.len() < 9_000 {
            resume.push_str(filler);
        }
        resume.push_str("\n\nLed a distributed tracing rollout across Kubernetes clusters.\n\n");
        while resume.len() < 12_000 {
            resume.push_str(filler);
        }

        assert_eq!(
            ChunkPolicy::for_length(resume.chars().count()),
            ChunkPolicy {
                chunk_size: 1_200,
                overlap: 250
            }
        );

        let all_chunks = chunk_text(&resume);
        let relevant = all_chunks.iter().filter(|c| mentions_keyword(c)).count();
        assert!(relevant >= 2, "expected keyword chunks, got {relevant}");
        assert!(relevant < 5);

        let jd = "We need a Golang engineer with Kubernetes experience building distributed systems.";
        let selected = select_relevant_chunks(&all_chunks, jd, 5);

        assert_eq!(selected.len(), 5);
        assert!(selected[..relevant].iter().all(|c| mentions_keyword(c)));
        assert!(selected[relevant..].iter().all(|c| !mentions_keyword(c)));
    }
}
