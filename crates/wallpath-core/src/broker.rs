//! Priority-ordered message delivery over named channels.
//!
//! A [`MessageBroker`] owns one [`Channel`] per topic. Each channel holds the
//! handlers subscribed to it; publishing persists the message in the queue,
//! and processing delivers pending messages synchronously to the handlers of
//! their channel, highest priority first.
//!
//! ```rust,no_run
//! use wallpath_core::{broker::MessageBroker, Database};
//!
//! # fn example() -> wallpath_core::Result<()> {
//! let mut broker = MessageBroker::new();
//! broker.subscribe("robot_status", |message| {
//!     println!("status: {message}");
//!     Ok(())
//! });
//!
//! let mut db = Database::new("robot.db")?;
//! broker.publish(&mut db, "robot_status", "warming up", 0)?;
//! let delivered = broker.process(&mut db, Some("robot_status"))?;
//! assert_eq!(delivered, 1);
//! # Ok(())
//! # }
//! ```

use std::{collections::HashMap, fmt};

use log::{debug, error, info};

use crate::{db::Database, error::Result, models::QueuedMessage};

/// Topic carrying trajectory commands.
pub const TRAJECTORY_COMMANDS: &str = "trajectory_commands";
/// Topic carrying robot status updates.
pub const ROBOT_STATUS: &str = "robot_status";
/// Messages above this priority are delivered as soon as they are published.
pub const IMMEDIATE_PRIORITY_THRESHOLD: i32 = 5;

/// Callback invoked with the text of each delivered message.
pub type Handler = Box<dyn Fn(&str) -> anyhow::Result<()> + Send + Sync>;

/// Handlers subscribed to one topic.
pub struct Channel {
    name: String,
    handlers: Vec<Handler>,
}

impl Channel {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            handlers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Runs every handler on `message`; failures are logged and skipped.
    fn deliver(&self, message: &QueuedMessage) {
        for handler in &self.handlers {
            if let Err(e) = handler(&message.message) {
                error!("Error processing message {} on '{}': {e:#}", message.id, self.name);
            }
        }
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("name", &self.name)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// Registry of channels and the delivery loop over the persisted queue.
#[derive(Debug, Default)]
pub struct MessageBroker {
    channels: HashMap<String, Channel>,
}

impl MessageBroker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `handler` to the channel for `topic`, creating the channel.
    pub fn subscribe<F>(&mut self, topic: &str, handler: F)
    where
        F: Fn(&str) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.channels
            .entry(topic.to_string())
            .or_insert_with(|| Channel::new(topic))
            .handlers
            .push(Box::new(handler));
    }

    pub fn channel(&self, topic: &str) -> Option<&Channel> {
        self.channels.get(topic)
    }

    /// Queues a message; high-priority messages are delivered immediately.
    pub fn publish(
        &self,
        db: &mut Database,
        topic: &str,
        message: &str,
        priority: i32,
    ) -> Result<QueuedMessage> {
        let queued = db.enqueue_message(topic, message, priority)?;
        info!("Message published to topic '{topic}': {message}");

        if priority > IMMEDIATE_PRIORITY_THRESHOLD {
            self.process(db, Some(topic))?;
        }

        Ok(queued)
    }

    /// Delivers pending messages, optionally only those of `topic`.
    ///
    /// Messages without subscribers are still marked processed. Returns the
    /// number of messages handled.
    pub fn process(&self, db: &mut Database, topic: Option<&str>) -> Result<usize> {
        let pending = db.pending_messages(topic)?;

        for message in &pending {
            match self.channels.get(&message.topic) {
                Some(channel) => channel.deliver(message),
                None => debug!("No subscribers for topic '{}'", message.topic),
            }
            db.mark_processed(message.id)?;
        }

        Ok(pending.len())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tempfile::NamedTempFile;

    use super::*;
    use crate::models::MessageStatus;

    fn create_test_db() -> (NamedTempFile, Database) {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        let db = Database::new(temp_file.path()).expect("Failed to create test database");
        (temp_file, db)
    }

    fn recording_broker(topic: &str) -> (MessageBroker, Arc<Mutex<Vec<String>>>) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);
        let mut broker = MessageBroker::new();
        broker.subscribe(topic, move |message| {
            sink.lock().expect("lock").push(message.to_string());
            Ok(())
        });
        (broker, received)
    }

    #[test]
    fn test_process_delivers_by_priority() {
        let (_temp_file, mut db) = create_test_db();
        let (broker, received) = recording_broker(ROBOT_STATUS);

        broker.publish(&mut db, ROBOT_STATUS, "low", 1).expect("publish");
        broker.publish(&mut db, ROBOT_STATUS, "high", 4).expect("publish");
        broker.publish(&mut db, ROBOT_STATUS, "also low", 1).expect("publish");
        assert!(received.lock().expect("lock").is_empty());

        let delivered = broker.process(&mut db, None).expect("process");
        assert_eq!(delivered, 3);
        assert_eq!(*received.lock().expect("lock"), vec!["high", "low", "also low"]);

        assert_eq!(broker.process(&mut db, None).expect("process"), 0);
    }

    #[test]
    fn test_high_priority_publish_delivers_immediately() {
        let (_temp_file, mut db) = create_test_db();
        let (broker, received) = recording_broker(ROBOT_STATUS);

        let queued = broker
            .publish(&mut db, ROBOT_STATUS, "urgent", 8)
            .expect("publish");

        assert_eq!(*received.lock().expect("lock"), vec!["urgent"]);
        let stored = db.list_messages(ROBOT_STATUS, 10).expect("list");
        assert_eq!(stored[0].id, queued.id);
        assert_eq!(stored[0].status, MessageStatus::Processed);
        assert!(stored[0].processed_at.is_some());
    }

    #[test]
    fn test_process_by_topic_leaves_other_topics_pending() {
        let (_temp_file, mut db) = create_test_db();
        let (broker, received) = recording_broker(TRAJECTORY_COMMANDS);

        broker.publish(&mut db, TRAJECTORY_COMMANDS, "start", 0).expect("publish");
        broker.publish(&mut db, ROBOT_STATUS, "idle", 0).expect("publish");

        assert_eq!(broker.process(&mut db, Some(TRAJECTORY_COMMANDS)).expect("process"), 1);
        assert_eq!(*received.lock().expect("lock"), vec!["start"]);

        let pending = db.pending_messages(None).expect("pending");
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].topic, ROBOT_STATUS);
    }

    #[test]
    fn test_failing_handler_does_not_block_delivery() {
        let (_temp_file, mut db) = create_test_db();
        let (mut broker, received) = recording_broker(ROBOT_STATUS);
        broker.subscribe(ROBOT_STATUS, |_| anyhow::bail!("handler exploded"));

        broker.publish(&mut db, ROBOT_STATUS, "first", 0).expect("publish");
        broker.publish(&mut db, ROBOT_STATUS, "second", 0).expect("publish");

        assert_eq!(broker.process(&mut db, None).expect("process"), 2);
        assert_eq!(received.lock().expect("lock").len(), 2);
        let channel = broker.channel(ROBOT_STATUS).expect("channel");
        assert_eq!(channel.name(), ROBOT_STATUS);
        assert_eq!(channel.handler_count(), 2);
        assert!(db.pending_messages(None).expect("pending").is_empty());
    }
}
