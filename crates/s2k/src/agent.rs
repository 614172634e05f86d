//! Registry of smart-card agents keyed by card serial

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use gpgext_api::{CardAgent, Error, Result};

struct AgentEntry {
    agent: Arc<dyn CardAgent>,
    serials: Vec<Vec<u8>>,
}

fn same_agent(a: &Arc<dyn CardAgent>, b: &Arc<dyn CardAgent>) -> bool {
    // Compare data pointers only; vtable pointers for one type may differ
    // between codegen units.
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}

/// Maps card serial numbers to the agent able to unlock that card.
///
/// Every serial is claimed at most once, and entries are never removed. All
/// access goes through one lock, so a registry can be shared between threads
/// behind a plain reference.
pub struct CardAgentRegistry {
    entries: Mutex<Vec<AgentEntry>>,
}

impl CardAgentRegistry {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// The process-wide registry, created on first use
    pub fn global() -> &'static CardAgentRegistry {
        static GLOBAL: OnceLock<CardAgentRegistry> = OnceLock::new();
        GLOBAL.get_or_init(CardAgentRegistry::new)
    }

    fn entries(&self) -> MutexGuard<'_, Vec<AgentEntry>> {
        // Entries are only ever appended, so a panic elsewhere cannot leave
        // them half-written.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Associate `serial` with `agent`.
    ///
    /// Fails if any agent, this one or another, already claimed `serial`.
    pub fn register(&self, serial: &[u8], agent: Arc<dyn CardAgent>) -> Result<()> {
        let mut entries = self.entries();

        let claimed = entries
            .iter()
            .any(|entry| entry.serials.iter().any(|s| s.as_slice() == serial));
        if claimed {
            tracing::warn!(serial = %hex::encode(serial), "card serial already has an agent");
            return Err(Error::unsupported(
                "card agent registry",
                format!("registered card agent exists for serial: {}", hex::encode(serial)),
            ));
        }

        match entries.iter_mut().find(|entry| same_agent(&entry.agent, &agent)) {
            Some(entry) => entry.serials.push(serial.to_vec()),
            None => entries.push(AgentEntry {
                agent,
                serials: vec![serial.to_vec()],
            }),
        }

        tracing::debug!(serial = %hex::encode(serial), "registered card agent");
        Ok(())
    }

    /// The agent registered for exactly `serial`, if any
    pub fn lookup(&self, serial: &[u8]) -> Option<Arc<dyn CardAgent>> {
        self.entries()
            .iter()
            .find(|entry| entry.serials.iter().any(|s| s.as_slice() == serial))
            .map(|entry| Arc::clone(&entry.agent))
    }

    /// Number of registered serials
    pub fn len(&self) -> usize {
        self.entries().iter().map(|entry| entry.serials.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CardAgentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CardAgentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries();
        f.debug_struct("CardAgentRegistry")
            .field("agents", &entries.len())
            .field(
                "serials",
                &entries
                    .iter()
                    .flat_map(|entry| entry.serials.iter().map(hex::encode))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
