//! Bridge between the streaming application and the tracker.
//!
//! A thin plugin shim inside the host application mirrors the active scene
//! to this process and forwards its tick callback; position commands and
//! reference releases flow back. Messages are JSON objects tagged by
//! `"type"`, each framed by a 4-byte little-endian length prefix.

use crate::config::Config;
use crate::constants::MAX_MESSAGE_SIZE;
use crate::host::{ItemRef, MemoryHost, SceneItemDesc};
use crate::models::{CanvasDimensions, ModifierSet, OffsetSettings};
use crate::platform::WindowSystem;
use crate::tracker::TrackerService;
use crate::validation::validate_offsets;
use log::{debug, error};
use serde::{Deserialize, Serialize};
use std::io::{self, Read, Write};

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum IncomingMessage {
    #[serde(rename = "scene")]
    Scene { items: Vec<SceneItemDesc> },
    #[serde(rename = "canvas")]
    Canvas { width: u32, height: u32 },
    #[serde(rename = "settings")]
    Settings(OffsetSettings),
    #[serde(rename = "tick")]
    Tick { seconds: f64 },
    #[serde(rename = "request_state")]
    RequestState,
    #[serde(rename = "shutdown")]
    Shutdown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionCommand {
    pub item: ItemRef,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackedSummary {
    pub item: ItemRef,
    pub name: String,
    pub modifiers: ModifierSet,
    pub title: String,
    pub resolved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum OutgoingMessage {
    #[serde(rename = "positions")]
    Positions { moves: Vec<PositionCommand> },
    #[serde(rename = "released")]
    Released { items: Vec<ItemRef> },
    #[serde(rename = "state")]
    State {
        canvas: CanvasDimensions,
        offsets: OffsetSettings,
        tracked: Vec<TrackedSummary>,
    },
    #[serde(rename = "error")]
    Error { message: String },
}

pub struct NativeHost<W: WindowSystem> {
    tracker: TrackerService<W>,
    scene: MemoryHost,
    offsets: OffsetSettings,
}

impl<W: WindowSystem> NativeHost<W> {
    pub fn new(windows: W, config: &Config) -> Self {
        Self {
            tracker: TrackerService::new(windows, config.tracker_config()),
            scene: MemoryHost::new(),
            offsets: config.offsets,
        }
    }

    /// Serve messages until `shutdown` or the input closes.
    ///
    /// A closed input surfaces as `ErrorKind::UnexpectedEof`.
    pub fn run<R: Read, O: Write>(&mut self, mut reader: R, mut writer: O) -> io::Result<()> {
        loop {
            let frame = read_frame(&mut reader)?;
            let message = match serde_json::from_slice::<IncomingMessage>(&frame) {
                Ok(message) => message,
                Err(e) => {
                    error!("Dropping undecodable message: {e}");
                    write_message(
                        &mut writer,
                        &OutgoingMessage::Error { message: format!("Invalid message: {e}") },
                    )?;
                    continue;
                }
            };

            let shutdown = matches!(message, IncomingMessage::Shutdown);
            for response in self.handle_message(message) {
                write_message(&mut writer, &response)?;
            }
            if shutdown {
                return Ok(());
            }
        }
    }

    pub fn handle_message(&mut self, message: IncomingMessage) -> Vec<OutgoingMessage> {
        match message {
            IncomingMessage::Scene { items } => {
                debug!("Scene mirror updated: {} item(s)", items.len());
                self.scene.replace_scene(items);
                if !self.tracker.is_running() {
                    self.tracker.initialize(&mut self.scene, self.offsets);
                }
                self.drain_commands()
            }
            IncomingMessage::Canvas { width, height } => {
                self.scene.set_canvas(CanvasDimensions { width, height });
                Vec::new()
            }
            IncomingMessage::Settings(offsets) => match validate_offsets(&offsets) {
                Ok(()) => {
                    self.offsets = offsets;
                    self.tracker.on_settings_changed(offsets);
                    Vec::new()
                }
                Err(e) => vec![OutgoingMessage::Error { message: e.into() }],
            },
            IncomingMessage::Tick { seconds } => {
                if !seconds.is_finite() || seconds < 0.0 {
                    return vec![OutgoingMessage::Error {
                        message: format!("Invalid tick length: {seconds}"),
                    }];
                }
                self.tracker.on_tick(&mut self.scene, seconds);
                self.drain_commands()
            }
            IncomingMessage::RequestState => vec![self.get_state()],
            IncomingMessage::Shutdown => {
                self.tracker.shutdown(&mut self.scene);
                self.drain_commands()
            }
        }
    }

    /// Queued releases, then queued position writes.
    fn drain_commands(&mut self) -> Vec<OutgoingMessage> {
        let mut out = Vec::new();

        let released = self.scene.take_releases();
        if !released.is_empty() {
            out.push(OutgoingMessage::Released { items: released });
        }

        let moves: Vec<PositionCommand> = self
            .scene
            .take_moves()
            .into_iter()
            .map(|(item, pos)| PositionCommand { item, x: pos.x, y: pos.y })
            .collect();
        if !moves.is_empty() {
            out.push(OutgoingMessage::Positions { moves });
        }

        out
    }

    fn get_state(&self) -> OutgoingMessage {
        let tracked = self
            .tracker
            .tracked_items()
            .iter()
            .map(|t| TrackedSummary {
                item: t.item,
                name: t.name.clone(),
                modifiers: t.modifiers.clone(),
                title: t.window.title.clone(),
                resolved: t.handle.is_some(),
            })
            .collect();

        OutgoingMessage::State {
            canvas: self.tracker.canvas(),
            offsets: self.tracker.offsets(),
            tracked,
        }
    }

    pub fn scene(&self) -> &MemoryHost {
        &self.scene
    }
}

fn read_frame<R: Read>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut len_bytes = [0u8; 4];
    reader.read_exact(&mut len_bytes)?;
    let len = usize::try_from(u32::from_le_bytes(len_bytes))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    if len > MAX_MESSAGE_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Message too large: {len} bytes (max: {MAX_MESSAGE_SIZE} bytes)"),
        ));
    }

    let mut buffer = vec![0u8; len];
    reader.read_exact(&mut buffer)?;
    Ok(buffer)
}

fn write_message<O: Write>(writer: &mut O, message: &OutgoingMessage) -> io::Result<()> {
    let json = serde_json::to_vec(message)?;
    let len = u32::try_from(json.len())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    writer.write_all(&len.to_le_bytes())?;
    writer.write_all(&json)?;
    writer.flush()?;

    Ok(())
}
