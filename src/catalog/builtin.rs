//! Built-in catalog table.
//!
//! Keys are a user-facing contract: automation calls the CLI with them, so
//! renaming or removing one is a breaking change.

use crate::registry::RegistryKey;

use super::ApplicationEntry;

pub(super) fn entries() -> Vec<ApplicationEntry> {
    vec![
        // Video production
        ApplicationEntry::new("premiere", "Adobe Premiere Pro", "Adobe Premiere Pro.exe")
            .with_dlls(&["dotnet48", "d3dx9", "d3dx10", "d3dx11", "corefonts"])
            .with_packages(&["libssl-dev", "libxss1", "libappindicator1"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Wine\\Direct3D")
                    .with("CSMT", "enabled")
                    .with("Renderer", "opengl")
                    .with("VideoMemorySize", 4096u32),
            )
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Adobe\\Premiere Pro\\14.0")
                    .with("GPU Acceleration", 1u32)
                    .with("CUDA", 1u32)
                    .with("OpenCL", 1u32),
            )
            .with_env("DXVK_HUD", "off")
            .with_env("PROTON_USE_WINED3D", "0")
            .with_requirements(16, true)
            .with_notes("Adobe Premiere requires NVIDIA GPU for CUDA acceleration"),
        ApplicationEntry::new("vegas", "Sony Vegas Pro", "Vegas.exe")
            .with_dlls(&["dotnet48", "d3dx9", "d3dx11", "corefonts", "vcrun2019"])
            .with_packages(&["libssl-dev", "libxss1"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Wine\\Direct3D")
                    .with("CSMT", "enabled")
                    .with("Renderer", "opengl")
                    .with("VideoMemorySize", 2048u32),
            )
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Sony\\Vegas\\19.0")
                    .with("HardwareAcceleration", 1u32)
                    .with("CUDA", 1u32),
            )
            .with_env("DXVK_HUD", "off")
            .with_requirements(8, false)
            .with_notes("Sony Vegas Pro works with GPU acceleration on NVIDIA/AMD"),
        ApplicationEntry::new("3dsmax", "Autodesk 3DS Max", "3dsmax.exe")
            .with_dlls(&["dotnet48", "d3dx9", "d3dx10", "d3dx11", "d3dx12", "vcrun2019", "corefonts"])
            .with_packages(&["libssl-dev", "libx11-6", "libxext6", "libxrender1"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Wine\\Direct3D")
                    .with("CSMT", "enabled")
                    .with("Renderer", "opengl")
                    .with("VideoMemorySize", 4096u32)
                    .with("StrictDrawOrdering", "enabled"),
            )
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Autodesk\\3dsmax\\2024")
                    .with("HardwareRenderer", "DirectX11")
                    .with("GPUDeviceIndex", 0u32),
            )
            .with_env("DXVK_HUD", "off")
            .with_env("PROTON_USE_WINED3D", "0")
            .with_requirements(16, true)
            .with_notes("3DS Max requires dedicated GPU for viewport performance"),
        ApplicationEntry::new("office", "Microsoft Office", "WINWORD.EXE")
            .with_dlls(&["dotnet48", "corefonts", "vcrun2019", "vb6run"])
            .with_packages(&["libssl-dev"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Microsoft\\Office\\16.0\\Word")
                    .with("HardwareAcceleration", 1u32),
            )
            .with_env("DXVK_HUD", "off")
            .with_requirements(4, false)
            .with_notes("Microsoft Office works well with Wine/Proton"),
        // Audio production
        ApplicationEntry::new("audition", "Adobe Audition", "Audition.exe")
            .with_dlls(&["dotnet48", "d3dx9", "d3dx11", "corefonts", "vcrun2019"])
            .with_packages(&["libpulse-dev", "libasound2-dev", "libsndfile1-dev"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Adobe\\Audition\\2024")
                    .with("HardwareAcceleration", 1u32)
                    .with("AudioBufferSize", 512u32),
            )
            .with_env("DXVK_HUD", "off")
            .with_env("ALSA_CONFIG_DIR", "/etc/alsa")
            .with_requirements(8, false)
            .with_notes("Adobe Audition audio editing suite"),
        ApplicationEntry::new("cubase", "Cubase/Nuendo", "cubase.exe")
            .with_dlls(&["dotnet48", "vcrun2019"])
            .with_requirements(6, false)
            .with_notes("Steinberg Cubase/Nuendo DAW"),
        ApplicationEntry::new("ableton", "Ableton Live", "Ableton Live 12 Suite.exe")
            .with_dlls(&["dotnet48", "d3dx9", "d3dx11", "corefonts", "vcrun2019"])
            .with_packages(&["libpulse-dev", "libasound2-dev", "jackd"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Ableton\\Live\\12.0")
                    .with("AudioBufferSize", 256u32)
                    .with("BufferSize", 512u32),
            )
            .with_env("DXVK_HUD", "off")
            .with_requirements(8, false)
            .with_notes("Music production DAW"),
        ApplicationEntry::new("protools", "Pro Tools", "protools.exe")
            .with_dlls(&["dotnet48", "vcrun2019"])
            .with_requirements(8, false)
            .with_notes("Professional audio DAW by Avid"),
        ApplicationEntry::new("reason", "Propellerheads Reason", "reason.exe")
            .with_dlls(&["dotnet48", "vcrun2019"])
            .with_requirements(6, false)
            .with_notes("Propellerheads Reason music production"),
        // CAD
        ApplicationEntry::new("autocad", "Autodesk AutoCAD", "acad.exe")
            .with_dlls(&["dotnet48", "d3dx9", "d3dx10", "d3dx11", "d3dx12", "vcrun2019", "corefonts"])
            .with_packages(&["libssl-dev", "libx11-6", "libxext6", "libxrender1"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Autodesk\\AutoCAD\\2024")
                    .with("HardwareRenderer", "DirectX11")
                    .with("Performance", "High"),
            )
            .with_env("DXVK_HUD", "off")
            .with_env("PROTON_USE_WINED3D", "0")
            .with_requirements(16, true)
            .with_notes("Professional 2D/3D CAD software"),
        ApplicationEntry::new("solidworks", "SolidWorks", "sldworks.exe")
            .with_dlls(&["dotnet48", "d3dx9", "d3dx10", "d3dx11", "d3dx12", "vcrun2019", "corefonts"])
            .with_packages(&["libssl-dev", "libx11-6", "libxext6"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\SolidWorks\\SolidWorks 2024")
                    .with("Performance", "Maximum")
                    .with("GPU", "Enabled"),
            )
            .with_env("DXVK_HUD", "off")
            .with_env("PROTON_USE_WINED3D", "0")
            .with_requirements(16, true)
            .with_notes("3D CAD design software"),
        ApplicationEntry::new("fusion360", "Autodesk Fusion 360", "Fusion360.exe")
            .with_dlls(&["dotnet48", "d3dx9", "d3dx10", "d3dx11", "d3dx12", "vcrun2019", "corefonts"])
            .with_packages(&["libssl-dev", "libx11-6"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Autodesk\\Fusion360\\1.0")
                    .with("GPU", "Enabled")
                    .with("ViewportPerformance", "High"),
            )
            .with_env("DXVK_HUD", "off")
            .with_env("PROTON_USE_WINED3D", "0")
            .with_requirements(8, true)
            .with_notes("Cloud-based 3D CAD/CAM platform"),
        ApplicationEntry::new("arcgis", "ArcGIS", "arcgis.exe")
            .with_dlls(&["dotnet48", "vcrun2019"])
            .with_requirements(8, true)
            .with_notes("ESRI GIS mapping and spatial analysis"),
        // Adobe creative suite
        ApplicationEntry::new("photoshop", "Adobe Photoshop", "Photoshop.exe")
            .with_dlls(&["dotnet48", "d3dx9", "d3dx11", "corefonts", "vcrun2019"])
            .with_packages(&["libssl-dev", "libx11-6", "libxext6"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Adobe\\Photoshop\\2024")
                    .with("GPUAcceleration", 1u32)
                    .with("VRAM", 2048u32),
            )
            .with_env("DXVK_HUD", "off")
            .with_requirements(4, false)
            .with_notes("Professional image editing and graphic design"),
        ApplicationEntry::new("lightroom", "Adobe Lightroom", "Lightroom.exe")
            .with_dlls(&["dotnet48", "d3dx9", "d3dx11", "corefonts", "vcrun2019"])
            .with_packages(&["libssl-dev", "libx11-6"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Adobe\\Lightroom\\2024")
                    .with("GPU", "enabled")
                    .with("CacheSize", 4096u32),
            )
            .with_env("DXVK_HUD", "off")
            .with_requirements(4, false)
            .with_notes("Professional photo management and editing"),
        ApplicationEntry::new("illustrator", "Adobe Illustrator", "Illustrator.exe")
            .with_dlls(&["dotnet48", "d3dx9", "d3dx11", "corefonts", "vcrun2019"])
            .with_packages(&["libssl-dev", "libx11-6", "libxext6"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Adobe\\Illustrator\\2024")
                    .with("GPU", "enabled")
                    .with("Performance", "high"),
            )
            .with_env("DXVK_HUD", "off")
            .with_requirements(4, false)
            .with_notes("Professional vector graphics and illustration"),
        ApplicationEntry::new("aftereffects", "Adobe After Effects", "AfterFX.exe")
            .with_dlls(&["dotnet48", "d3dx9", "d3dx10", "d3dx11", "d3dx12", "corefonts", "vcrun2019"])
            .with_packages(&["libssl-dev", "libx11-6", "libxext6"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Adobe\\After Effects\\2024")
                    .with("GPUAcceleration", 1u32)
                    .with("CUDA", 1u32)
                    .with("RayTracing", 1u32),
            )
            .with_env("DXVK_HUD", "off")
            .with_env("PROTON_USE_WINED3D", "0")
            .with_requirements(4, false)
            .with_notes("Professional motion graphics and VFX composition"),
        ApplicationEntry::new("indesign", "Adobe InDesign", "indesign.exe")
            .with_dlls(&["vcrun2019", "dotnet48"])
            .with_requirements(6, false)
            .with_notes("Adobe InDesign for layout and publishing"),
        // Autodesk and 3D printing
        ApplicationEntry::new("revit", "Autodesk Revit", "Revit.exe")
            .with_dlls(&["dotnet48", "d3dx9", "d3dx10", "d3dx11", "d3dx12", "vcrun2019", "corefonts"])
            .with_packages(&["libssl-dev", "libx11-6", "libxext6"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Autodesk\\Revit\\2024")
                    .with("GPU", "enabled")
                    .with("ViewportPerformance", "high")
                    .with("HardwareAcceleration", 1u32),
            )
            .with_env("DXVK_HUD", "off")
            .with_env("PROTON_USE_WINED3D", "0")
            .with_requirements(4, false)
            .with_notes("BIM and architectural design software"),
        ApplicationEntry::new("sketchbook", "Autodesk Sketchbook", "Sketchbook.exe")
            .with_dlls(&["dotnet48", "d3dx9", "d3dx11", "corefonts", "vcrun2019"])
            .with_packages(&["libssl-dev", "libx11-6"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Autodesk\\Sketchbook\\2024")
                    .with("HardwareAcceleration", 1u32),
            )
            .with_env("DXVK_HUD", "off")
            .with_requirements(4, false)
            .with_notes("Digital painting and drawing software"),
        ApplicationEntry::new("3dprinting", "PrusaSlicer", "prusaslicer.exe")
            .with_dlls(&["vcrun2019"])
            .with_requirements(4, false)
            .with_notes("PrusaSlicer 3D printer slicing software"),
        ApplicationEntry::new("superslicer", "SuperSlicer", "superslicer.exe")
            .with_dlls(&["vcrun2019"])
            .with_requirements(4, false)
            .with_notes("Advanced 3D printer slicing software"),
        // Corel
        ApplicationEntry::new("coreldraw", "CorelDRAW", "CorelDRAW.exe")
            .with_dlls(&["dotnet48", "d3dx9", "d3dx11", "corefonts", "vcrun2019"])
            .with_packages(&["libssl-dev", "libx11-6", "libxext6"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Corel\\CorelDRAW\\2024")
                    .with("GPU", "enabled")
                    .with("Performance", "high"),
            )
            .with_env("DXVK_HUD", "off")
            .with_requirements(4, false)
            .with_notes("Professional vector graphics and design"),
        ApplicationEntry::new("corelpainter", "Corel Painter", "Painter.exe")
            .with_dlls(&["dotnet48", "d3dx9", "d3dx11", "corefonts", "vcrun2019"])
            .with_packages(&["libssl-dev", "libx11-6"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Corel\\Painter\\2024")
                    .with("HardwareAcceleration", 1u32),
            )
            .with_env("DXVK_HUD", "off")
            .with_requirements(4, false)
            .with_notes("Professional digital painting and illustration"),
        // Microsoft productivity
        ApplicationEntry::new("teams", "Microsoft Teams", "Teams.exe")
            .with_dlls(&["dotnet48", "corefonts", "vcrun2019"])
            .with_packages(&["libssl-dev", "libx11-6"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Microsoft\\Teams")
                    .with("HardwareAcceleration", 1u32),
            )
            .with_env("DXVK_HUD", "off")
            .with_requirements(4, false)
            .with_notes("Collaboration and meetings client"),
        ApplicationEntry::new("copilot", "Microsoft Copilot", "Copilot.exe")
            .with_dlls(&["dotnet48", "corefonts"])
            .with_packages(&["libssl-dev"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Microsoft\\Copilot")
                    .with("EnableGPU", 0u32),
            )
            .with_env("DXVK_HUD", "off")
            .with_requirements(4, false)
            .with_notes("AI assistant integrations and widgets"),
        ApplicationEntry::new("access", "Microsoft Access", "MSACCESS.EXE")
            .with_dlls(&["dotnet48", "corefonts", "vcrun2019", "vb6run"])
            .with_packages(&["libssl-dev"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Microsoft\\Office\\16.0\\Access")
                    .with("HardwareAcceleration", 0u32),
            )
            .with_env("DXVK_HUD", "off")
            .depending_on(&["office"])
            .with_requirements(4, false)
            .with_notes("Database desktop application (part of Microsoft Office)"),
        ApplicationEntry::new("visio", "Microsoft Visio", "visio.exe")
            .with_dlls(&["dotnet48"])
            .depending_on(&["office"])
            .with_requirements(6, false)
            .with_notes("Microsoft diagramming and visualization tool"),
        ApplicationEntry::new("sharepoint", "Microsoft SharePoint", "sharepoint.exe")
            .with_dlls(&["dotnet48"])
            .with_requirements(6, false)
            .with_notes("Microsoft SharePoint collaboration platform"),
        ApplicationEntry::new("powerbi", "Power BI", "powerbi.exe")
            .with_dlls(&["dotnet48"])
            .with_requirements(6, false)
            .with_notes("Microsoft Power BI analytics platform"),
        // Development tools
        ApplicationEntry::new("visualstudio", "Microsoft Visual Studio", "devenv.exe")
            .with_dlls(&["dotnet48", "dotnet462", "vcrun2019", "corefonts"])
            .with_packages(&["libssl-dev", "libxml2-dev"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Microsoft\\VisualStudio\\17.0")
                    .with("Performance", "Optimized"),
            )
            .with_env("DXVK_HUD", "off")
            .with_requirements(8, false)
            .with_notes("IDE for C#, C++, Python development"),
        ApplicationEntry::new("jetbrains", "JetBrains IDE", "bin/idea.exe")
            .with_dlls(&["dotnet48", "vcrun2019", "corefonts"])
            .with_packages(&["openjdk-17-jdk", "libssl-dev"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\JetBrains\\IDE")
                    .with("Performance", "Maximum"),
            )
            .with_env("DXVK_HUD", "off")
            .with_env("_JAVA_OPTIONS", "-Xmx4096m")
            .with_requirements(4, false)
            .with_notes("PyCharm, IntelliJ IDEA, WebStorm, Rider, etc."),
        ApplicationEntry::new("notepad++", "Notepad++", "notepad++.exe")
            .with_dlls(&["dotnet48"])
            .with_requirements(4, false)
            .with_notes("Lightweight text editor with syntax highlighting"),
        // Graphics and design
        ApplicationEntry::new("paintnet", "Paint.NET", "paintdotnet.exe")
            .with_dlls(&["dotnet48"])
            .with_requirements(4, false)
            .with_notes("Simple yet powerful image editor"),
        ApplicationEntry::new("figma", "Figma", "figma.exe")
            .with_requirements(4, false)
            .with_notes("Web-based UI/UX design tool"),
        // Game engines and launchers
        ApplicationEntry::new("unity", "Unity Engine", "Unity.exe")
            .with_dlls(&["dotnet48", "d3dx9", "d3dx10", "d3dx11", "d3dx12", "vcrun2019", "corefonts"])
            .with_packages(&["libssl-dev", "libx11-6"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\Unity\\Editor\\2023.2")
                    .with("Performance", "Maximum")
                    .with("GPU", "Enabled"),
            )
            .with_env("DXVK_HUD", "off")
            .with_env("PROTON_USE_WINED3D", "0")
            .with_requirements(8, true)
            .with_notes("Game engine and development platform"),
        ApplicationEntry::new("unreal", "Unreal Engine", "UE4Editor.exe")
            .with_dlls(&["dotnet48", "d3dx9", "d3dx10", "d3dx11", "d3dx12", "vcrun2019", "corefonts"])
            .with_packages(&["libssl-dev", "libx11-6"])
            .with_registry(
                RegistryKey::new("HKEY_CURRENT_USER\\Software\\EpicGames\\Unreal Engine\\5.3")
                    .with("GPU", "Enabled")
                    .with("Performance", "Maximum"),
            )
            .with_env("DXVK_HUD", "off")
            .with_env("PROTON_USE_WINED3D", "0")
            .with_requirements(16, true)
            .with_notes("Professional game engine"),
        ApplicationEntry::new("eaapp", "EA App", "eaapp.exe")
            .with_dlls(&["dotnet48", "vcrun2019"])
            .with_requirements(6, false)
            .with_notes("EA Games launcher"),
        // Business and finance
        ApplicationEntry::new("quickbooks", "QuickBooks", "quickbooks.exe")
            .with_dlls(&["dotnet48", "vcrun2019"])
            .with_requirements(6, false)
            .with_notes("Intuit accounting and bookkeeping"),
        ApplicationEntry::new("turbotax", "TurboTax", "turbotax.exe")
            .with_dlls(&["dotnet48", "vcrun2019"])
            .with_requirements(6, false)
            .with_notes("Tax preparation software"),
        ApplicationEntry::new("tableau", "Tableau", "tableau.exe")
            .with_dlls(&["dotnet48"])
            .with_requirements(6, false)
            .with_notes("Tableau business intelligence and analytics"),
        // Media and cloud
        ApplicationEntry::new("itunes", "iTunes", "itunes.exe")
            .with_dlls(&["dotnet48", "vcrun2019"])
            .with_requirements(6, false)
            .with_notes("Apple media player and management"),
        ApplicationEntry::new("dropbox", "Dropbox", "dropbox.exe")
            .with_dlls(&["vcrun2019"])
            .with_requirements(4, false)
            .with_notes("Cloud storage and sync service"),
        ApplicationEntry::new("googledrive", "Google Drive", "googledrive.exe")
            .with_requirements(4, false)
            .with_notes("Google Cloud Drive sync"),
        ApplicationEntry::new("wordpress", "WordPress", "wordpress.exe")
            .with_requirements(4, false)
            .with_notes("Web-based content management system"),
        ApplicationEntry::new("notion", "Notion", "notion.exe")
            .with_requirements(4, false)
            .with_notes("Web-based note-taking and project management"),
        ApplicationEntry::new("grammarly", "Grammarly", "grammarly.exe")
            .with_requirements(4, false)
            .with_notes("AI-powered writing assistant"),
        // Video and subtitles
        ApplicationEntry::new("virtualdub", "VirtualDub", "virtualdub.exe")
            .with_dlls(&["vcrun2019"])
            .with_requirements(4, false)
            .with_notes("Video capture and editing utility"),
        ApplicationEntry::new("avisynth", "AviSynth", "avisynth.exe")
            .with_dlls(&["vcrun2019"])
            .with_requirements(4, false)
            .with_notes("Video scripting language and framework"),
        ApplicationEntry::new("vobsub", "VobSub", "vobsub.exe")
            .with_requirements(4, false)
            .with_notes("Subtitle manipulation and rendering"),
        // Games with anti-cheat
        ApplicationEntry::new("valorant", "Valorant", "valorant.exe")
            .with_dlls(&["vcrun2019", "dxvk"])
            .with_requirements(8, true)
            .with_notes("Riot Games tactical shooter (Vanguard anti-cheat prevents execution)"),
        ApplicationEntry::new("r6siege", "Rainbow Six Siege", "r6siege.exe")
            .with_dlls(&["vcrun2019", "dxvk"])
            .with_requirements(8, true)
            .with_notes("Ubisoft tactical shooter (BattlEye anti-cheat has limited compatibility)"),
        ApplicationEntry::new("battleye", "BattlEye", "beservice.exe")
            .with_dlls(&["vcrun2019"])
            .with_requirements(4, false)
            .with_notes("BattlEye anti-cheat system (limited compatibility)"),
        ApplicationEntry::new("sharex", "ShareX", "sharex.exe")
            .with_dlls(&["dotnet48"])
            .with_requirements(4, false)
            .with_notes("Screenshot and screen recording utility"),
        ApplicationEntry::new("hwmonitor", "HWMonitor", "hwmonitor.exe")
            .with_requirements(4, false)
            .with_notes("Hardware monitoring and temperature utility"),
    ]
}
