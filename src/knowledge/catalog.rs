// Builtin component catalog
//
// Curated from the hardware dataset the classifiers are trained on. A JSON
// file given in the settings replaces this table wholesale.

use super::ComponentEntry;

fn entry(
    label: &str,
    category: &str,
    definition: &str,
    why_useful: &str,
    fixing_tips: &[&str],
    related: &[&str],
) -> ComponentEntry {
    ComponentEntry {
        label: label.to_string(),
        category: category.to_string(),
        definition: definition.to_string(),
        why_useful: why_useful.to_string(),
        fixing_tips: fixing_tips.iter().map(|t| t.to_string()).collect(),
        related: related.iter().map(|r| r.to_string()).collect(),
    }
}

pub fn builtin_entries() -> Vec<ComponentEntry> {
    vec![
        // Performance
        entry(
            "RAM Upgrade",
            "Performance",
            "Additional or faster system memory modules.",
            "More RAM lets the machine keep more programs and browser tabs active without swapping to disk.",
            &[
                "Check current RAM usage in Task Manager (Ctrl+Shift+Esc)",
                "Close unnecessary programs and browser tabs",
                "Check if RAM modules are fully seated",
                "Run Windows Memory Diagnostic",
                "Verify RAM compatibility with your motherboard",
                "If RAM usage is consistently above 80%, upgrade is recommended",
            ],
            &["SSD Upgrade", "CPU Upgrade"],
        ),
        entry(
            "CPU Upgrade",
            "Performance",
            "A faster or higher-core-count processor.",
            "A stronger CPU removes compute bottlenecks in multitasking, compiling, and simulation workloads.",
            &[
                "Check CPU usage in Task Manager",
                "Update chipset drivers",
                "Check CPU temperature (under 70°C idle, 85°C under load)",
                "Check if the CPU is bottlenecking (high CPU usage, low GPU usage in games)",
                "Verify CPU compatibility with the motherboard socket",
                "If the CPU sits at 100% during normal tasks, upgrade is recommended",
            ],
            &["RAM Upgrade", "CPU Cooler Upgrade"],
        ),
        entry(
            "GPU Upgrade",
            "Performance",
            "A more capable discrete graphics card.",
            "A faster GPU raises frame rates and unblocks rendering and GPU-accelerated workloads.",
            &[
                "Update graphics drivers from the manufacturer website",
                "Check GPU temperature (should stay under 80°C under load)",
                "Clean GPU fans and heatsink from dust",
                "Check if the GPU is properly seated in the PCIe slot",
                "Verify the power supply can handle GPU requirements",
                "If FPS is consistently low even on low settings, upgrade is needed",
            ],
            &["CPU Upgrade", "RAM Upgrade"],
        ),
        entry(
            "CPU Cooler Upgrade",
            "Performance",
            "A higher-capacity air or liquid cooler for the processor.",
            "Better cooling stops thermal throttling and protects the CPU under sustained load.",
            &[
                "Check CPU temperature in BIOS or with Core Temp",
                "Clean the cooler and case fans from dust",
                "Reapply thermal paste (replace every 2-3 years)",
                "Check the cooler is properly mounted",
                "If CPU temperature exceeds 85°C under load, a cooler upgrade is needed",
            ],
            &["Thermal Paste Reapply", "Case Fan Upgrade"],
        ),
        entry(
            "GPU Cooler Upgrade",
            "Performance",
            "Improved cooling for the graphics card.",
            "Keeps GPU clocks stable during long gaming or rendering sessions.",
            &[
                "Check GPU temperature with GPU-Z or MSI Afterburner",
                "Clean GPU fans and heatsink",
                "Improve case airflow",
                "Check the GPU fans are spinning",
                "If GPU temperature exceeds 83°C, a cooling upgrade is recommended",
            ],
            &["Case Fan Upgrade"],
        ),
        entry(
            "Case Fan Upgrade",
            "Performance",
            "Additional or higher-airflow chassis fans.",
            "Better case airflow lowers temperatures for every component at once.",
            &[
                "Check the fans are spinning",
                "Clean fans from dust buildup",
                "Check fan connections to the motherboard",
                "Ensure proper airflow (intake front, exhaust back/top)",
            ],
            &["CPU Cooler Upgrade"],
        ),
        entry(
            "Thermal Paste Reapply",
            "Performance",
            "Fresh thermal interface material between CPU and cooler.",
            "Dried-out paste is a common cause of high CPU temperatures and is cheap to fix.",
            &[
                "Power off the PC and unplug it",
                "Remove the CPU cooler carefully",
                "Clean old paste with isopropyl alcohol and a lint-free cloth",
                "Apply a pea-sized amount of new paste to the CPU center",
                "Reinstall the cooler evenly without overtightening",
            ],
            &["CPU Cooler Upgrade"],
        ),
        // Power
        entry(
            "PSU Upgrade",
            "Power",
            "A replacement or higher-wattage power supply unit.",
            "A healthy PSU with headroom is the fix for machines that will not start or shut down under load.",
            &[
                "Check the power cable is properly connected",
                "Try a different power outlet",
                "Check the PSU fan - if it never spins, the PSU may be dead",
                "Listen for clicking or buzzing from the PSU",
                "PSU wattage should be 20-30% above total system draw",
                "If the PC will not turn on at all, the PSU is the likely cause",
            ],
            &["Power Cable Replacement", "UPS Upgrade"],
        ),
        entry(
            "Power Cable Replacement",
            "Power",
            "A new mains power cable.",
            "Damaged or loose cables mimic PSU failure and cost almost nothing to rule out.",
            &[
                "Check the cable for visible damage or fraying",
                "Try a different power cable",
                "Check connections at both ends",
                "If the cable is damaged or loose, replace it",
            ],
            &["PSU Upgrade"],
        ),
        entry(
            "Laptop Battery Replacement",
            "Power",
            "A new internal or external laptop battery.",
            "Restores unplugged runtime and removes the risk of a swollen pack.",
            &[
                "Check if the battery is swollen (stop using it immediately if so)",
                "Check battery health in the OS power settings",
                "Check if the laptop works when plugged in - if yes, the battery is at fault",
                "If the battery does not hold charge, replace it",
            ],
            &[],
        ),
        entry(
            "UPS Upgrade",
            "Power",
            "An uninterruptible power supply between mains and the PC.",
            "Rides through outages and brownouts that otherwise cause instant shutdowns.",
            &[
                "Check the UPS battery is charged",
                "Test the UPS by unplugging mains power",
                "Check UPS capacity matches the PC's power draw",
            ],
            &["PSU Upgrade"],
        ),
        // Network
        entry(
            "WiFi Adapter Upgrade",
            "Network",
            "A newer internal or USB wireless network adapter.",
            "Modern adapters hold weak signals better and fix chronic disconnects.",
            &[
                "Check WiFi is enabled",
                "Update WiFi drivers from the manufacturer website",
                "Restart the router and modem",
                "Check signal strength - move closer to the router",
                "Check whether other devices can connect",
                "If WiFi keeps disconnecting on this machine only, upgrade the adapter",
            ],
            &["Router Upgrade"],
        ),
        entry(
            "Router Upgrade",
            "Network",
            "A newer wireless router.",
            "Fixes poor range and slow speeds affecting every device in the home.",
            &[
                "Restart the router and modem",
                "Update router firmware",
                "Change to a less crowded WiFi channel",
                "Position the router centrally",
                "If range or speed is poor for all devices, upgrade the router",
            ],
            &["WiFi Adapter Upgrade"],
        ),
        entry(
            "Bluetooth Adapter",
            "Network",
            "A USB Bluetooth dongle or replacement module.",
            "Adds or restores reliable short-range wireless for peripherals.",
            &[
                "Check Bluetooth is enabled in system settings",
                "Update Bluetooth drivers",
                "Restart the Bluetooth support service",
                "Remove and re-pair devices",
            ],
            &[],
        ),
        // Display
        entry(
            "Monitor or GPU Check",
            "Display",
            "Diagnosis pass across the monitor, cable, and graphics card.",
            "No-display symptoms are usually one of three cheap-to-isolate links in the video chain.",
            &[
                "Check monitor power and video cables",
                "Try a different monitor or cable",
                "Reseat the GPU in its PCIe slot",
                "Check the GPU fans spin at power-on",
                "Check the monitor input source setting",
                "Test with integrated graphics if available",
            ],
            &["Display Cable Replacement", "GPU Upgrade"],
        ),
        entry(
            "Monitor Replacement",
            "Display",
            "A new display panel.",
            "Physical panel damage cannot be repaired economically.",
            &[
                "Confirm damage is on the panel (dead pixels, cracks) and not the cable",
                "Test the PC on another monitor",
                "If the panel is physically damaged, replace the monitor",
            ],
            &["Display Cable Replacement"],
        ),
        entry(
            "Display Cable Replacement",
            "Display",
            "A new HDMI, DisplayPort, or VGA cable.",
            "Worn cables cause signal loss and flicker and are the cheapest link to swap.",
            &[
                "Check both cable ends are firmly seated",
                "Try a different cable or port",
                "If symptoms follow the cable, replace it",
            ],
            &["Monitor or GPU Check"],
        ),
        // Storage
        entry(
            "SSD Upgrade",
            "Storage",
            "A solid-state drive replacing or supplementing a hard disk.",
            "An SSD removes the storage bottleneck behind slow boots and long load times.",
            &[
                "Check disk usage in Task Manager (Disk tab)",
                "Run Disk Cleanup to free space",
                "Disable unnecessary startup programs",
                "Check disk health with a SMART tool",
                "If boot takes over a minute from a hard disk, an SSD upgrade is the fix",
            ],
            &["RAM Upgrade", "HDD Upgrade"],
        ),
        entry(
            "HDD Upgrade",
            "Storage",
            "A larger mechanical hard drive for bulk storage.",
            "Cheap capacity for archives and media once the system drive is an SSD.",
            &[
                "Check free space on existing drives",
                "Move large media libraries off the system drive",
                "Check drive health before migrating data",
            ],
            &["SSD Upgrade"],
        ),
        // Other / peripherals
        entry(
            "Webcam Upgrade",
            "Other",
            "A replacement or external USB webcam.",
            "Restores video in meetings when the built-in camera fails or is missing.",
            &[
                "Check the webcam is allowed in OS privacy settings",
                "Update webcam drivers",
                "Check the camera works in another app",
                "Check Device Manager for camera errors",
                "Unplug and replug an external webcam",
                "If the camera still fails after troubleshooting, replace it",
            ],
            &[],
        ),
        entry(
            "Microphone Upgrade",
            "Other",
            "A replacement or external microphone.",
            "Fixes calls where others cannot hear you and poor recording quality.",
            &[
                "Check microphone privacy settings",
                "Test the microphone in the OS sound settings",
                "Update audio drivers",
                "Check the microphone is the default recording device",
            ],
            &[],
        ),
        entry(
            "Audio Issue",
            "Other",
            "Audio output troubleshooting and, if needed, new speakers or a sound device.",
            "Most no-sound reports are settings or driver problems, not failed hardware.",
            &[
                "Check volume is not muted",
                "Check the correct output device is selected",
                "Update audio drivers",
                "Test with headphones",
                "Run the OS audio troubleshooter",
            ],
            &[],
        ),
        entry(
            "Keyboard Issue",
            "Other",
            "Keyboard troubleshooting or replacement.",
            "Isolates dead keys and connection faults before buying new hardware.",
            &[
                "Check the keyboard connection",
                "Try a different USB port",
                "Test the keyboard on another PC",
                "Clean debris from under the keys",
            ],
            &[],
        ),
        entry(
            "Mouse Issue",
            "Other",
            "Mouse troubleshooting or replacement.",
            "Rules out sensor dirt and cable faults before replacement.",
            &[
                "Check the mouse connection",
                "Try a different USB port",
                "Clean the sensor",
                "Test the mouse on another PC",
            ],
            &[],
        ),
        entry(
            "USB Hub",
            "Other",
            "A powered USB hub adding extra ports.",
            "The direct fix when a machine simply has fewer ports than devices.",
            &[
                "Check existing ports work with other devices",
                "Prefer a powered hub for disks and charging",
            ],
            &[],
        ),
    ]
}
