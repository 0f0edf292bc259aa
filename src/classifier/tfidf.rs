//! TF-IDF vectorizer for text feature extraction.
//!
//! `fit` builds a [`Vocabulary`] with smoothed idf weights from a training
//! corpus; `transform` turns any text into an L2-normalized
//! [`SparseVector`] over that vocabulary. Terms never seen during fitting
//! are dropped.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{AnalysisConfig, Analyzer, StandardAnalyzer};
use crate::error::{Result, SmsGuardError};

/// Sparse document vector: `(vocabulary index, weight)` pairs sorted by index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build a vector from arbitrary entries. Entries are sorted by index and
    /// zero weights are dropped.
    pub fn new(mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|&(_, weight)| weight != 0.0);
        entries.sort_by_key(|&(index, _)| index);
        Self { entries }
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self::default()
    }

    /// True when no term carries weight.
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Non-zero entries in index order.
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Iterate over `(index, weight)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Weight at `index`, zero when absent.
    pub fn get(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |&(i, _)| i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Largest index present, if any.
    pub fn max_index(&self) -> Option<usize> {
        self.entries.last().map(|&(index, _)| index)
    }
}

/// Fitted vocabulary: term -> index plus per-term idf.
///
/// Indices follow lexicographic term order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "VocabularyRepr", into = "VocabularyRepr")]
pub struct Vocabulary {
    terms: Vec<String>,
    idf: Vec<f64>,
    index: AHashMap<String, usize>,
}

#[derive(Serialize, Deserialize)]
struct VocabularyRepr {
    terms: Vec<String>,
    idf: Vec<f64>,
}

impl TryFrom<VocabularyRepr> for Vocabulary {
    type Error = String;

    fn try_from(repr: VocabularyRepr) -> std::result::Result<Self, Self::Error> {
        Vocabulary::from_parts(repr.terms, repr.idf).map_err(|e| e.to_string())
    }
}

impl From<Vocabulary> for VocabularyRepr {
    fn from(vocabulary: Vocabulary) -> Self {
        VocabularyRepr {
            terms: vocabulary.terms,
            idf: vocabulary.idf,
        }
    }
}

impl Vocabulary {
    fn from_parts(terms: Vec<String>, idf: Vec<f64>) -> Result<Self> {
        if terms.len() != idf.len() {
            return Err(SmsGuardError::analysis(format!(
                "vocabulary has {} terms but {} idf weights",
                terms.len(),
                idf.len()
            )));
        }
        if let Some(bad) = idf.iter().find(|w| !w.is_finite() || **w <= 0.0) {
            return Err(SmsGuardError::analysis(format!("invalid idf weight {bad}")));
        }

        let index: AHashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();
        if index.len() != terms.len() {
            return Err(SmsGuardError::analysis("vocabulary contains duplicate terms"));
        }

        Ok(Self { terms, idf, index })
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True for an unfitted vocabulary.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Index of `term`, if known.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Term stored at `index`.
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    /// idf weight of `term`, if known.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.index_of(term).map(|i| self.idf[i])
    }

    /// All terms in index order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// TF-IDF vectorizer for text feature extraction.
pub struct TfIdfVectorizer {
    vocabulary: Vocabulary,
    n_documents: usize,
    analysis: AnalysisConfig,
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create an unfitted vectorizer whose analyzer follows `analysis`.
    pub fn new(analysis: AnalysisConfig) -> Result<Self> {
        let analyzer = Arc::new(StandardAnalyzer::from_config(analysis.clone())?);
        Ok(Self {
            vocabulary: Vocabulary {
                terms: Vec::new(),
                idf: Vec::new(),
                index: AHashMap::new(),
            },
            n_documents: 0,
            analysis,
            analyzer,
        })
    }

    /// Fit the vectorizer on training documents.
    ///
    /// `idf(t) = ln((1 + N) / (1 + df(t))) + 1`. Fails when the corpus
    /// produces no terms at all (empty corpus, or only stop words).
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();

        for doc in documents {
            let unique_terms: HashSet<String> =
                self.analyzer.terms(doc.as_ref())?.into_iter().collect();
            for term in unique_terms {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(SmsGuardError::analysis(format!(
                "empty vocabulary after fitting {} documents",
                documents.len()
            )));
        }

        let n = documents.len() as f64;
        let (terms, idf): (Vec<String>, Vec<f64>) = document_frequency
            .into_iter()
            .map(|(term, df)| {
                let idf = ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0;
                (term, idf)
            })
            .unzip();

        self.vocabulary = Vocabulary::from_parts(terms, idf)?;
        self.n_documents = documents.len();

        log::debug!(
            "fitted tf-idf vocabulary: {} terms from {} documents",
            self.vocabulary.len(),
            self.n_documents
        );

        Ok(())
    }

    /// Transform a document into an L2-normalized TF-IDF vector.
    ///
    /// Text without any vocabulary term (including `""`) yields the zero
    /// vector.
    pub fn transform(&self, document: &str) -> Result<SparseVector> {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in self.analyzer.terms(document)? {
            if let Some(idx) = self.vocabulary.index_of(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let weighted: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.vocabulary.idf[idx]))
            .collect();

        let norm = weighted.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm == 0.0 {
            return Ok(SparseVector::zero());
        }

        Ok(SparseVector {
            entries: weighted.into_iter().map(|(i, w)| (i, w / norm)).collect(),
        })
    }

    /// Fit on `documents` and return their vectors.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Vec<SparseVector>> {
        self.fit(documents)?;
        documents
            .iter()
            .map(|doc| self.transform(doc.as_ref()))
            .collect()
    }

    /// Get the fitted vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of documents seen by `fit`.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Analysis settings used for tokenization.
    pub fn analysis_config(&self) -> &AnalysisConfig {
        &self.analysis
    }
}

/// Serialized form of a fitted vectorizer.
#[derive(Serialize, Deserialize)]
pub(crate) struct VectorizerArtifact {
    analysis: AnalysisConfig,
    n_documents: usize,
    vocabulary: Vocabulary,
}

impl TfIdfVectorizer {
    pub(crate) fn to_artifact(&self) -> VectorizerArtifact {
        VectorizerArtifact {
            analysis: self.analysis.clone(),
            n_documents: self.n_documents,
            vocabulary: self.vocabulary.clone(),
        }
    }

    /// Rebuild the analyzer from the stored settings.
    pub(crate) fn from_artifact(artifact: VectorizerArtifact) -> Result<Self> {
        let mut vectorizer = TfIdfVectorizer::new(artifact.analysis)?;
        vectorizer.vocabulary = artifact.vocabulary;
        vectorizer.n_documents = artifact.n_documents;
        Ok(vectorizer)
    }
}
