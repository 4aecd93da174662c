use lapse_core::keyframe::Keyframe;
use lapse_core::settings::SettingsDoc;

/// Build a keyframe whose document authors the three interpolated scalars.
pub fn keyframe(index: usize, temperature: f64, green: f64, exposure: f64) -> Keyframe {
    let text = format!(
        "[White Balance]\n\
         Setting=Custom\n\
         Temperature={temperature}\n\
         Green={green}\n\
         \n\
         [Exposure]\n\
         Compensation={exposure}\n"
    );
    Keyframe::from_doc(index, SettingsDoc::parse(&text).unwrap()).unwrap()
}

/// Like [`keyframe`], with an uncropped `[Crop]` section carrying the source
/// dimensions the way an unedited profile does.
#[allow(dead_code)]
pub fn keyframe_with_dims(
    index: usize,
    temperature: f64,
    green: f64,
    exposure: f64,
    width: u32,
    height: u32,
) -> Keyframe {
    let mut kf = keyframe(index, temperature, green, exposure);
    kf.doc.set("Crop", "Enabled", "false");
    kf.doc.set("Crop", "W", width.to_string());
    kf.doc.set("Crop", "H", height.to_string());
    kf
}
