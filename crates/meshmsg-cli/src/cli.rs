//! Command-line arguments.

use clap::{Args, Parser, Subcommand, ValueEnum};
use meshmsg_access::{MessageError, MicSize, ModelMessage, TransactionIdSource, Transition};
use std::path::PathBuf;

/// Encode mesh access-layer messages.
#[derive(Parser, Debug)]
#[command(name = "meshmsg", about = "Encode mesh access-layer messages", version)]
pub struct Cli {
    /// YAML configuration file.
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Application key as 32 hex characters.
    #[arg(long, conflicts_with = "key_index")]
    pub key: Option<String>,

    /// Index of an application key in the configuration file.
    #[arg(long)]
    pub key_index: Option<u16>,

    /// MIC size (defaults to the configured value).
    #[arg(long, value_enum)]
    pub mic: Option<MicArg>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: MessageCommand,
}

/// MIC size selector.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum MicArg {
    /// 32-bit MIC.
    Small,
    /// 64-bit MIC.
    Large,
}

impl From<MicArg> for MicSize {
    fn from(arg: MicArg) -> Self {
        match arg {
            MicArg::Small => MicSize::Small,
            MicArg::Large => MicSize::Large,
        }
    }
}

/// How encoded messages are printed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Labelled hex fields.
    Text,
    /// A single JSON object.
    Json,
}

/// Optional transition block. Either all three fields or none.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct TransitionArgs {
    /// Number of transition steps (0-63).
    #[arg(long, requires_all = ["resolution", "delay"], allow_negative_numbers = true)]
    pub steps: Option<i64>,

    /// Step resolution: 0 = 100 ms, 1 = 1 s, 2 = 10 s, 3 = 10 min.
    #[arg(long, requires_all = ["steps", "delay"], allow_negative_numbers = true)]
    pub resolution: Option<i64>,

    /// Delay before the transition starts, in 5 ms units (0-255).
    #[arg(long, requires_all = ["steps", "resolution"], allow_negative_numbers = true)]
    pub delay: Option<i64>,
}

impl TransitionArgs {
    /// Build the transition block, if one was given.
    pub fn to_transition(self) -> Result<Option<Transition>, MessageError> {
        match (self.steps, self.resolution, self.delay) {
            (Some(steps), Some(resolution), Some(delay)) => {
                Transition::from_raw(steps, resolution, delay).map(Some)
            }
            _ => Ok(None),
        }
    }
}

/// Options shared by every `set`-style message.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct SetArgs {
    /// Transaction id (0-255). Taken from the configured counter when omitted.
    #[arg(long, allow_negative_numbers = true)]
    pub tid: Option<i64>,

    /// Send the unacknowledged variant.
    #[arg(long)]
    pub unack: bool,

    #[command(flatten)]
    pub transition: TransitionArgs,
}

impl SetArgs {
    fn tid(&self, tids: &mut impl TransactionIdSource) -> i64 {
        self.tid.unwrap_or_else(|| tids.next_tid().into())
    }

    fn finish(&self, message: ModelMessage) -> ModelMessage {
        if self.unack {
            message.unacknowledged()
        } else {
            message
        }
    }
}

/// Messages the encoder can build.
#[derive(Subcommand, Debug, Clone)]
pub enum MessageCommand {
    /// Print the AID of the selected application key.
    Aid,

    /// Generic OnOff Get.
    OnoffGet,

    /// Generic OnOff Set.
    OnoffSet {
        /// Target state (0 or 1).
        #[arg(allow_negative_numbers = true)]
        state: i64,
        #[command(flatten)]
        set: SetArgs,
    },

    /// Generic Level Get.
    LevelGet,

    /// Generic Level Set.
    LevelSet {
        /// Target level (-32768 to 32767).
        #[arg(allow_negative_numbers = true)]
        level: i64,
        #[command(flatten)]
        set: SetArgs,
    },

    /// Generic Delta Set.
    DeltaSet {
        /// Level change (signed 32-bit).
        #[arg(allow_negative_numbers = true)]
        delta: i64,
        #[command(flatten)]
        set: SetArgs,
    },

    /// Generic Move Set.
    MoveSet {
        /// Level change per transition period (signed 16-bit).
        #[arg(allow_negative_numbers = true)]
        delta: i64,
        #[command(flatten)]
        set: SetArgs,
    },

    /// Light Lightness Get.
    LightnessGet,

    /// Light Lightness Set.
    LightnessSet {
        /// Target lightness (0-65535).
        #[arg(allow_negative_numbers = true)]
        lightness: i64,
        #[command(flatten)]
        set: SetArgs,
    },

    /// Scene Get.
    SceneGet,

    /// Scene Register Get.
    SceneRegisterGet,

    /// Scene Recall.
    SceneRecall {
        /// Scene number (0-65535).
        #[arg(allow_negative_numbers = true)]
        scene: i64,
        #[command(flatten)]
        set: SetArgs,
    },

    /// Scene Store.
    SceneStore {
        /// Scene number (0-65535).
        #[arg(allow_negative_numbers = true)]
        scene: i64,
        /// Send the unacknowledged variant.
        #[arg(long)]
        unack: bool,
    },

    /// Scene Delete.
    SceneDelete {
        /// Scene number (0-65535).
        #[arg(allow_negative_numbers = true)]
        scene: i64,
        /// Send the unacknowledged variant.
        #[arg(long)]
        unack: bool,
    },
}

impl MessageCommand {
    /// Build the model message. Returns `None` for commands that do not
    /// encode a message.
    pub fn to_message(
        &self,
        tids: &mut impl TransactionIdSource,
    ) -> Result<Option<ModelMessage>, MessageError> {
        let message = match self {
            MessageCommand::Aid => return Ok(None),
            MessageCommand::OnoffGet => ModelMessage::GenericOnOffGet,
            MessageCommand::OnoffSet { state, set } => set.finish(ModelMessage::generic_on_off_set(
                *state,
                set.tid(tids),
                set.transition.to_transition()?,
            )?),
            MessageCommand::LevelGet => ModelMessage::GenericLevelGet,
            MessageCommand::LevelSet { level, set } => set.finish(ModelMessage::generic_level_set(
                *level,
                set.tid(tids),
                set.transition.to_transition()?,
            )?),
            MessageCommand::DeltaSet { delta, set } => set.finish(ModelMessage::generic_delta_set(
                *delta,
                set.tid(tids),
                set.transition.to_transition()?,
            )?),
            MessageCommand::MoveSet { delta, set } => set.finish(ModelMessage::generic_move_set(
                *delta,
                set.tid(tids),
                set.transition.to_transition()?,
            )?),
            MessageCommand::LightnessGet => ModelMessage::LightLightnessGet,
            MessageCommand::LightnessSet { lightness, set } => {
                set.finish(ModelMessage::light_lightness_set(
                    *lightness,
                    set.tid(tids),
                    set.transition.to_transition()?,
                )?)
            }
            MessageCommand::SceneGet => ModelMessage::SceneGet,
            MessageCommand::SceneRegisterGet => ModelMessage::SceneRegisterGet,
            MessageCommand::SceneRecall { scene, set } => set.finish(ModelMessage::scene_recall(
                *scene,
                set.tid(tids),
                set.transition.to_transition()?,
            )?),
            MessageCommand::SceneStore { scene, unack } => {
                let message = ModelMessage::scene_store(*scene)?;
                if *unack {
                    message.unacknowledged()
                } else {
                    message
                }
            }
            MessageCommand::SceneDelete { scene, unack } => {
                let message = ModelMessage::scene_delete(*scene)?;
                if *unack {
                    message.unacknowledged()
                } else {
                    message
                }
            }
        };
        Ok(Some(message))
    }
}
