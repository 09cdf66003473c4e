//! The generate-fake action
//!
//! Reads the selected protocol, derives a fake from it and hands the fake to
//! the persister. Collaborators are injected once at construction; the
//! action itself holds no mutable state.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;

use crate::{
    error::{Error, Result},
    fake::FakeGenerator,
    interfaces::{
        ActionLogger, Alerter, FakeProtocolPersister, SelectedTextProxy, Severity,
        SourceCodeDocumentProxy, Tokenizer,
    },
    lexer::ObjcLexer,
    parser::ProtocolParser,
};

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersistedFake {
    pub protocol: String,
    pub class_name: String,
    pub paths: Vec<PathBuf>,
}

pub struct GenerateFakeAction {
    alerter: Arc<dyn Alerter>,
    logger: Arc<dyn ActionLogger>,
    selection: Arc<dyn SelectedTextProxy>,
    persister: Arc<dyn FakeProtocolPersister>,
    document: Arc<dyn SourceCodeDocumentProxy>,
    tokenizer: Arc<dyn Tokenizer>,
    generator: FakeGenerator,
}

impl GenerateFakeAction {
    pub fn new(
        alerter: Arc<dyn Alerter>,
        logger: Arc<dyn ActionLogger>,
        selection: Arc<dyn SelectedTextProxy>,
        persister: Arc<dyn FakeProtocolPersister>,
        document: Arc<dyn SourceCodeDocumentProxy>,
    ) -> Self {
        Self {
            alerter,
            logger,
            selection,
            persister,
            document,
            tokenizer: Arc::new(ObjcLexer::new()),
            generator: FakeGenerator::default(),
        }
    }

    pub fn with_generator(mut self, generator: FakeGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn alerter(&self) -> &Arc<dyn Alerter> {
        &self.alerter
    }

    pub fn logger(&self) -> &Arc<dyn ActionLogger> {
        &self.logger
    }

    pub fn selection(&self) -> &Arc<dyn SelectedTextProxy> {
        &self.selection
    }

    pub fn persister(&self) -> &Arc<dyn FakeProtocolPersister> {
        &self.persister
    }

    pub fn document(&self) -> &Arc<dyn SourceCodeDocumentProxy> {
        &self.document
    }

    pub fn generator(&self) -> &FakeGenerator {
        &self.generator
    }

    /// Generate and persist a fake for the selected protocol. Nothing is
    /// persisted unless the whole selection parses.
    pub fn generate_fake_for_selected_protocol(&self) -> Result<PersistedFake> {
        let selection = self
            .selection
            .current_selection()
            .filter(|selection| !selection.is_blank())
            .ok_or(Error::EmptySelection)?;
        self.logger.log(
            &format!(
                "Parsing {} selected bytes at offset {}",
                selection.text.len(),
                selection.offset
            ),
            Severity::Debug,
        );

        let mut parser = ProtocolParser::with_tokenizer(Arc::clone(&self.tokenizer))?;
        let protocol = parser.parse_protocol(&selection.text, selection.offset)?;

        let location = self.document.fake_location().ok_or(Error::NoDocument)?;
        let fake = self.generator.generate(&protocol, &location.header_import);
        let paths = self.persister.persist(&fake, &location)?;

        self.logger.log(
            &format!(
                "Generated {} for protocol {} in {}",
                fake.class_name,
                protocol.name,
                location.directory.display()
            ),
            Severity::Info,
        );
        Ok(PersistedFake {
            protocol: protocol.name,
            class_name: fake.class_name,
            paths,
        })
    }

    /// Like [`Self::generate_fake_for_selected_protocol`], but every failure
    /// ends in one log entry and one alert instead of an error
    pub fn safely_generate_fake_for_selected_protocol(&self) -> Option<PersistedFake> {
        match self.generate_fake_for_selected_protocol() {
            Ok(persisted) => Some(persisted),
            Err(e) => {
                self.logger
                    .log(&format!("Fake generation failed: {e}"), Severity::Error);
                self.alerter.present_alert(&e.user_message());
                None
            }
        }
    }
}
