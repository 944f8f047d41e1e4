use std::sync::OnceLock;

use regex::Regex;

// 手机端 User-Agent 特征，末尾为屏幕分辨率形式如 240x320
const PHONE_PATTERN: &str = r"(?i)\b(ip(hone|od)|android|opera m(ob|in)i|windows (phone|ce)|blackberry|s(ymbian|eries60|amsung)|p(laybook|alm|rofile/midp|laystation portable)|nokia|fennec|htc[-_]|mobile|up\.browser|[1-4][0-9]{2}x[1-4][0-9]{2})\b";

// 平板 User-Agent 特征
const TABLET_PATTERN: &str = r"(?i)\b(ipad|tablet|nexus 7|up\.browser|[1-4][0-9]{2}x[1-4][0-9]{2})\b";

static PHONE: OnceLock<Regex> = OnceLock::new();
static TABLET: OnceLock<Regex> = OnceLock::new();

fn phone() -> &'static Regex {
    PHONE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("valid phone pattern"))
}

fn tablet() -> &'static Regex {
    TABLET.get_or_init(|| Regex::new(TABLET_PATTERN).expect("valid tablet pattern"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Mobile,
    Desktop,
}

impl DeviceKind {
    pub fn is_mobile(self) -> bool {
        self == DeviceKind::Mobile
    }
}

/// 根据 User-Agent 判断是否为移动端，平板按移动端处理
pub fn detect_device(user_agent: Option<&str>) -> DeviceKind {
    let Some(agent) = user_agent else {
        return DeviceKind::Desktop;
    };

    if phone().is_match(agent) || tablet().is_match(agent) {
        DeviceKind::Mobile
    } else {
        DeviceKind::Desktop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phones_and_tablets_are_mobile() {
        let agents = [
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15",
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Mobile Safari/537.36",
            "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15",
            "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)",
            "Mozilla/5.0 (Linux; Nexus 7 Build/JSS15Q) AppleWebKit/537.36",
        ];
        for agent in agents {
            assert_eq!(detect_device(Some(agent)), DeviceKind::Mobile, "{agent}");
        }
    }

    #[test]
    fn desktop_browsers_and_missing_header_are_desktop() {
        let agent = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/126.0 Safari/537.36";
        assert_eq!(detect_device(Some(agent)), DeviceKind::Desktop);
        assert_eq!(detect_device(None), DeviceKind::Desktop);
    }

    #[test]
    fn tokens_only_match_whole_words() {
        let agents = [
            "Mozilla/5.0 (X11; Linux x86_64) napalm-crawler/1.0",
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 SamsungBrowser/23.0 Safari/537.36",
            "Mozilla/5.0 (Windows NT 10.0) Chrome/126.0 immobile-agent",
        ];
        for agent in agents {
            assert_eq!(detect_device(Some(agent)), DeviceKind::Desktop, "{agent}");
        }
    }

    #[test]
    fn screen_size_token_is_mobile() {
        assert_eq!(
            detect_device(Some("SonyEricssonK750i/R1AA Browser/SEMC-Browser/4.2 240x320")),
            DeviceKind::Mobile
        );
        assert_eq!(detect_device(Some("Agent/1.0 1920x1080")), DeviceKind::Desktop);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(detect_device(Some("SOMETHING IPHONE OS")), DeviceKind::Mobile);
        assert_eq!(detect_device(Some("generic BlackBerry9700")), DeviceKind::Desktop);
        assert_eq!(detect_device(Some("generic BLACKBERRY 9700")), DeviceKind::Mobile);
    }
}
