pub const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const API_KEY_PLACEHOLDER: &str = "YOUR_GEMINI_API_KEY";
pub const INPUT_DIR_NAME: &str = "input";
pub const OUTPUT_DIR_NAME: &str = "output";
pub const GENERATION_LOG_FILE: &str = "generation_log.json";

/// Extensions accepted by the remote editing pipeline (non-recursive `input/`).
pub const INPUT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
/// Extensions rewritten in place by the EXIF stripping pipeline.
pub const CLEAN_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

pub const JPEG_QUALITY: u8 = 95;

/// Fixed editing instruction sent with every image. The parking-sensor logic
/// matters: the overlay state decides how aggressively the model may clean.
pub const EDIT_PROMPT: &str = "You are an AI image processing expert integrated into a car's computer system. Your task is to clean up the image displayed on the infotainment screen. \
**CONTEXT:** \
The input image is a photograph of a car's interior, showing an infotainment screen. This screen displays a live feed from a dirty rear-view camera. Importantly, the camera view includes a graphical overlay on the left side which displays data from the car's parking sensors. These indicators light up to show when objects are close to the car. \
**PRIMARY TASK: CLEAN THE CAMERA VIEW** \
1. Identify the area of the photograph that represents the camera view on the screen. \
2. Within that area, identify smudges, dirt, and water spots that are on the camera lens. \
3. Aggressively remove these lens artifacts. \
4. As you clean, you must perfectly preserve and maintain the realism of all underlying details in the outdoor scene, especially people, animals, buildings, and ground textures. \
**CRITICAL CONSTRAINT: IGNORE THE CAR INTERIOR** \
- You MUST NOT make any changes to the parts of the image showing the car's interior. The dashboard, screen bezel, air vents, etc., must be left completely untouched. \
**CONDITIONAL LOGIC FOR SAFETY:** \
- First, check the status of the visual parking sensor overlay on the left of the camera view. \
- **IF** the sensor overlay is lit up (e.g., shows red or yellow bars), it signifies a nearby object. In this case, you must be extremely cautious. The preservation of any figures (especially people) or objects in the scene takes absolute priority over cleaning. \
- **IF** the sensor overlay is NOT lit up, you can proceed with a more confident cleaning of the entire camera view, while still adhering to all preservation rules. \
- In all cases, preserving human figures is the most important objective. \
Return ONLY the processed image.";
