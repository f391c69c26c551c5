use std::fmt;

/// Source database schema a [`Message`](crate::Message) was normalized from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageVersion {
    /// Windows client, v3 `MSG` table (`wechatv3`)
    WeChatV3,
    /// v4 client, per-talker `Msg_*` tables (`wechatv4`)
    WeChatV4,
    /// macOS client, v3 `Chat_*` tables (`wechatdarwinv3`)
    WeChatDarwinV3,
}

impl MessageVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WeChatV3 => "wechatv3",
            Self::WeChatV4 => "wechatv4",
            Self::WeChatDarwinV3 => "wechatdarwinv3",
        }
    }
}

impl TryFrom<&str> for MessageVersion {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "wechatv3" => Ok(Self::WeChatV3),
            "wechatv4" => Ok(Self::WeChatV4),
            "wechatdarwinv3" => Ok(Self::WeChatDarwinV3),
            other => Err(format!("unknown message version: {other}")),
        }
    }
}

impl fmt::Display for MessageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
