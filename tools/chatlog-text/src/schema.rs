use chatnorm::MessageVersion;
use clap::ValueEnum;

/// Source schema of the input rows.
#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum SchemaArg {
    V3,
    V4,
    DarwinV3,
}

impl SchemaArg {
    pub fn version(&self) -> MessageVersion {
        match self {
            SchemaArg::V3 => MessageVersion::WeChatV3,
            SchemaArg::V4 => MessageVersion::WeChatV4,
            SchemaArg::DarwinV3 => MessageVersion::WeChatDarwinV3,
        }
    }
}
