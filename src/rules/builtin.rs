// Builtin rule table, in priority order
//
// Earlier rules take precedence. Short colloquial inputs come first, then
// symptom conjunctions. Audio conjunctions are declared before the camera
// rules so "zoom no sound" never resolves to a webcam.

use super::{Keywords, Rule};

fn one(
    keyword: &str,
    component: &str,
    confidence: f64,
    rationale: &str,
    related: &[&str],
) -> Rule {
    Rule {
        keywords: Keywords::One(keyword.to_string()),
        component: component.to_string(),
        confidence,
        rationale: rationale.to_string(),
        related: related.iter().map(|r| r.to_string()).collect(),
    }
}

fn all(
    keywords: &[&str],
    component: &str,
    confidence: f64,
    rationale: &str,
    related: &[&str],
) -> Rule {
    Rule {
        keywords: Keywords::All(keywords.iter().map(|k| k.to_string()).collect()),
        component: component.to_string(),
        confidence,
        rationale: rationale.to_string(),
        related: related.iter().map(|r| r.to_string()).collect(),
    }
}

pub fn builtin_rules() -> Vec<Rule> {
    vec![
        // Very short inputs - power
        one(
            "ps not start",
            "PSU Upgrade",
            0.95,
            "Power supply not starting indicates PSU failure. Also check the power cable.",
            &["Power Cable Replacement"],
        ),
        one(
            "pc not start",
            "PSU Upgrade",
            0.94,
            "PC not starting is usually a PSU or power cable issue.",
            &["Power Cable Replacement"],
        ),
        one(
            "no power",
            "PSU Upgrade",
            0.95,
            "No power usually means PSU failure.",
            &["Power Cable Replacement"],
        ),
        one(
            "pc shuts down instantly",
            "PSU Upgrade",
            0.96,
            "Instant shutdowns are typically caused by power supply failure.",
            &[],
        ),
        one(
            "random shutdown",
            "PSU Upgrade",
            0.94,
            "Random shutdowns often indicate an insufficient or failing power supply.",
            &["CPU Cooler Upgrade"],
        ),
        // Very short inputs - performance
        one(
            "pc slow",
            "RAM Upgrade",
            0.90,
            "A slow PC most often needs a RAM or SSD upgrade.",
            &["SSD Upgrade", "CPU Upgrade"],
        ),
        one(
            "computer slow",
            "RAM Upgrade",
            0.90,
            "A slow computer usually needs a RAM or SSD upgrade.",
            &["SSD Upgrade"],
        ),
        one(
            "tabs closing",
            "RAM Upgrade",
            0.92,
            "Browser tabs closing automatically indicates insufficient RAM.",
            &[],
        ),
        all(
            &["out of memory"],
            "RAM Upgrade",
            0.93,
            "Out-of-memory errors suggest RAM capacity issues.",
            &["SSD Upgrade"],
        ),
        // Very short inputs - network
        one(
            "no internet",
            "WiFi Adapter Upgrade",
            0.92,
            "No internet could be a WiFi adapter or router issue.",
            &["Router Upgrade"],
        ),
        one(
            "wifi disconnects",
            "WiFi Adapter Upgrade",
            0.91,
            "Unstable WiFi connections suggest adapter issues.",
            &["Router Upgrade"],
        ),
        all(
            &["netflix", "buffering"],
            "WiFi Adapter Upgrade",
            0.92,
            "Streaming buffering indicates a network issue. Check the WiFi adapter and connection speed.",
            &["Router Upgrade"],
        ),
        all(
            &["streaming", "buffering"],
            "WiFi Adapter Upgrade",
            0.91,
            "Streaming buffering indicates a network issue.",
            &["Router Upgrade"],
        ),
        // Storage
        one(
            "slow boot",
            "SSD Upgrade",
            0.91,
            "Slow boot times are usually caused by an old hard disk. An SSD makes startup dramatically faster.",
            &["RAM Upgrade"],
        ),
        one(
            "takes long to start",
            "SSD Upgrade",
            0.91,
            "Long startup times point at the system drive. Upgrade to an SSD.",
            &["RAM Upgrade"],
        ),
        one(
            "disk 100%",
            "SSD Upgrade",
            0.90,
            "Constant full disk usage indicates a storage bottleneck.",
            &["RAM Upgrade"],
        ),
        all(
            &["games", "long to load"],
            "SSD Upgrade",
            0.91,
            "Games taking long to load indicates slow storage.",
            &[],
        ),
        one(
            "no space",
            "SSD Upgrade",
            0.89,
            "Running out of space calls for a larger SSD or an extra data drive.",
            &["HDD Upgrade"],
        ),
        // GPU
        one(
            "low fps",
            "GPU Upgrade",
            0.92,
            "Low FPS typically indicates insufficient GPU power.",
            &["CPU Upgrade", "RAM Upgrade"],
        ),
        one(
            "gaming lag",
            "GPU Upgrade",
            0.92,
            "Gaming lag typically indicates insufficient GPU power.",
            &["CPU Upgrade"],
        ),
        one(
            "frame drops",
            "GPU Upgrade",
            0.92,
            "Frame drops typically indicate insufficient GPU power.",
            &[],
        ),
        // Overheating (the gaming conjunction outranks the generic rule)
        all(
            &["overheat", "game"],
            "GPU Cooler Upgrade",
            0.90,
            "Overheating during games points at GPU cooling.",
            &["Case Fan Upgrade"],
        ),
        one(
            "overheat",
            "CPU Cooler Upgrade",
            0.90,
            "Overheating issues require better cooling and fresh thermal paste.",
            &["Thermal Paste Reapply", "Case Fan Upgrade"],
        ),
        one(
            "thermal paste",
            "Thermal Paste Reapply",
            0.93,
            "High CPU temperatures often mean dried or badly applied thermal paste.",
            &["CPU Cooler Upgrade"],
        ),
        all(
            &["cpu", "temperature"],
            "CPU Cooler Upgrade",
            0.90,
            "High CPU temperatures require better cooling.",
            &["Thermal Paste Reapply"],
        ),
        // Display
        all(
            &["no display", "fans spinning"],
            "Monitor or GPU Check",
            0.95,
            "No display with fans spinning typically indicates a GPU or monitor issue.",
            &["Display Cable Replacement"],
        ),
        one(
            "no signal",
            "Monitor or GPU Check",
            0.93,
            "No signal suggests a display chain problem. Check the cable and GPU seating.",
            &["Display Cable Replacement"],
        ),
        one(
            "flickering",
            "Monitor or GPU Check",
            0.92,
            "Screen flickering can indicate GPU issues or monitor problems. Check both.",
            &["Display Cable Replacement"],
        ),
        one(
            "dead pixels",
            "Monitor Replacement",
            0.95,
            "Physical screen damage requires monitor replacement.",
            &["Display Cable Replacement"],
        ),
        one(
            "cracked screen",
            "Monitor Replacement",
            0.95,
            "Physical screen damage requires monitor replacement.",
            &[],
        ),
        // Battery / USB
        one(
            "battery not charging",
            "Laptop Battery Replacement",
            0.93,
            "A battery that will not charge needs replacement. Check whether it is swollen.",
            &[],
        ),
        one(
            "need more usb",
            "USB Hub",
            0.88,
            "Insufficient USB ports are solved with a hub.",
            &[],
        ),
        // Audio conjunctions - declared before the camera rules
        all(
            &["zoom", "no sound"],
            "Audio Issue",
            0.93,
            "No sound in Zoom is an audio issue. Check audio settings in Zoom and the OS.",
            &[],
        ),
        all(
            &["teams", "no sound"],
            "Audio Issue",
            0.93,
            "No sound in Teams is an audio issue. Check audio settings in Teams and the OS.",
            &[],
        ),
        all(
            &["zoom", "no audio"],
            "Audio Issue",
            0.93,
            "No audio in Zoom is an audio issue. Check audio settings and device selection.",
            &[],
        ),
        // Microphone conjunctions - also before the camera rules
        all(
            &["zoom", "mic"],
            "Microphone Upgrade",
            0.92,
            "Zoom microphone issues may require a microphone upgrade. Check mic settings and permissions.",
            &[],
        ),
        all(
            &["teams", "mic"],
            "Microphone Upgrade",
            0.92,
            "Teams microphone issues may require a microphone upgrade.",
            &[],
        ),
        one(
            "can't hear me",
            "Microphone Upgrade",
            0.91,
            "People not hearing you indicates a microphone problem.",
            &[],
        ),
        // Application-specific camera rules
        all(
            &["zoom", "camera"],
            "Webcam Upgrade",
            0.95,
            "Zoom camera issues are webcam problems. Check webcam settings in Zoom and OS privacy settings.",
            &[],
        ),
        all(
            &["zoom", "video"],
            "Webcam Upgrade",
            0.94,
            "Zoom video not working indicates a webcam problem. Check webcam permissions and hardware.",
            &[],
        ),
        all(
            &["zoom", "not showing"],
            "Webcam Upgrade",
            0.94,
            "Zoom not showing video is a webcam issue.",
            &[],
        ),
        all(
            &["teams", "camera"],
            "Webcam Upgrade",
            0.94,
            "Teams camera issues are webcam problems.",
            &[],
        ),
        // Generic camera rules
        one(
            "camera not working",
            "Webcam Upgrade",
            0.95,
            "A camera that stopped working needs a webcam repair or upgrade.",
            &[],
        ),
        one(
            "webcam not working",
            "Webcam Upgrade",
            0.95,
            "A webcam that stopped working needs repair or replacement.",
            &[],
        ),
        one(
            "camera not detected",
            "Webcam Upgrade",
            0.94,
            "A camera that is not detected suggests a hardware or driver issue.",
            &[],
        ),
        one(
            "video call",
            "Webcam Upgrade",
            0.91,
            "Video call issues are usually webcam problems. Check settings and permissions.",
            &[],
        ),
    ]
}
