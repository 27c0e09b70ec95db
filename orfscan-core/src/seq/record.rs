use crate::error::BioResult;
use crate::seq::traits::SeqBytes;
use crate::seq::translation::{translate, Translation};
use crate::seq::{SeqKind, Sequence};

/// A named sequence, as read from FASTA.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeqRecord<S: SeqBytes> {
    pub id: Box<str>,
    pub desc: Option<Box<str>>,
    pub seq: S,
}

impl<S: SeqBytes> SeqRecord<S> {
    pub fn new(id: impl Into<Box<str>>, seq: S) -> Self {
        Self {
            id: id.into(),
            desc: None,
            seq,
        }
    }

    pub fn with_desc(mut self, desc: impl Into<Box<str>>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    pub fn seq(&self) -> &S {
        &self.seq
    }
}

impl SeqRecord<Sequence> {
    pub fn kind(&self) -> SeqKind {
        self.seq.kind()
    }

    /// Transcribe when the record holds DNA, then run the six-frame pipeline.
    pub fn translate(&self) -> BioResult<Translation> {
        let rna = self.seq.transcribe()?;
        Ok(translate(&rna))
    }
}
