//! # Output Module
//!
//! Display surfaces for a finished render:
//! - PNG file export of the 8-bit canvas
//! - Real-time visualization via TEV (The EXR Viewer)
//!
//! ## TEV Integration
//!
//! TEV expects linear floating-point channels in planar layout. The canvas
//! holds display-referred 8-bit sRGB values, so each channel is decoded back
//! to linear light before it is sent.

use std::net::TcpStream;
use std::path::Path;
use std::time::Instant;

use image::{ImageResult, RgbImage};
use log::{debug, info, warn};
use tev_client::{PacketCreateImage, PacketUpdateImage, TevClient};

/// Port TEV listens on when the address does not name one.
pub const TEV_DEFAULT_PORT: u16 = 14158;

const TEV_IMAGE_NAME: &str = "raycanvas_output";

/// Save the canvas as a PNG file.
///
/// The pixels are already quantized display values, so they are written
/// unchanged.
pub fn save_image_as_png<P: AsRef<Path>>(image: &RgbImage, output_path: P) -> ImageResult<()> {
    let output_path = output_path.as_ref();
    image.save(output_path)?;
    info!("Image saved as {}", output_path.display());
    Ok(())
}

/// Send the canvas to a running TEV instance.
///
/// Best effort: connection or protocol failures are logged as warnings and
/// the render is otherwise unaffected.
///
/// # Examples
///
/// ```ignore
/// send_image_to_tev(&image, "localhost:14158");
/// send_image_to_tev(&image, "192.168.1.100"); // Uses default port 14158
/// ```
pub fn send_image_to_tev(image: &RgbImage, tev_address: &str) {
    let tev_address = with_default_port(tev_address);
    let (width, height) = image.dimensions();

    debug!("Attempting to connect to TEV at {}", tev_address);

    let stream = match TcpStream::connect(&tev_address) {
        Ok(stream) => stream,
        Err(e) => {
            warn!("Failed to connect to TEV on {}: {}", tev_address, e);
            return;
        }
    };
    if let Err(e) = stream.set_nodelay(true) {
        debug!("Failed to set TCP_NODELAY: {}", e);
    }
    let mut client = TevClient::wrap(stream);

    let create_packet = PacketCreateImage {
        image_name: TEV_IMAGE_NAME,
        width,
        height,
        channel_names: &["R", "G", "B"],
        grab_focus: true,
    };
    if let Err(e) = client.send(create_packet) {
        warn!("Failed to create image in TEV: {}", e);
        return;
    }

    let data = planar_linear_channels(image);
    debug!(
        "Sending {} pixels to TEV ({:.1} MB)",
        data.len() / 3,
        data.len() as f32 * 4.0 / 1_000_000.0
    );
    let start_time = Instant::now();

    let pixel_count = width as u64 * height as u64;
    let update_packet = PacketUpdateImage {
        image_name: TEV_IMAGE_NAME,
        grab_focus: false,
        channel_names: &["R", "G", "B"],
        x: 0,
        y: 0,
        width,
        height,
        channel_offsets: &[0, pixel_count, 2 * pixel_count],
        channel_strides: &[1, 1, 1],
        data: &data,
    };

    match client.send(update_packet) {
        Ok(_) => info!(
            "Image data sent to TEV at {} in {:.2?}",
            tev_address,
            start_time.elapsed()
        ),
        Err(e) => warn!("Failed to send image data to TEV: {}", e),
    }
}

fn with_default_port(address: &str) -> String {
    if address.contains(':') {
        address.to_string()
    } else {
        format!("{}:{}", address, TEV_DEFAULT_PORT)
    }
}

/// Interleaved 8-bit RGB to planar linear f32 (RRR...GGG...BBB...).
fn planar_linear_channels(image: &RgbImage) -> Vec<f32> {
    let mut data = Vec::with_capacity(image.as_raw().len());
    for channel in 0..3 {
        data.extend(image.pixels().map(|pixel| srgb_to_linear(pixel[channel])));
    }
    data
}

/// Decode one sRGB-encoded 8-bit channel to linear light.
fn srgb_to_linear(value: u8) -> f32 {
    let encoded = value as f32 / 255.0;
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use image::Rgb;

    #[test]
    fn test_default_port() {
        assert_eq!(with_default_port("localhost"), "localhost:14158");
        assert_eq!(with_default_port("10.0.0.2:9000"), "10.0.0.2:9000");
    }

    #[test]
    fn test_srgb_endpoints() {
        assert_eq!(srgb_to_linear(0), 0.0);
        assert_relative_eq!(srgb_to_linear(255), 1.0, epsilon = 1e-6);
        assert!(srgb_to_linear(128) < 0.5);
    }

    #[test]
    fn test_planar_layout() {
        let mut image = RgbImage::new(2, 1);
        image.put_pixel(0, 0, Rgb([255, 0, 0]));
        image.put_pixel(1, 0, Rgb([0, 0, 255]));

        let data = planar_linear_channels(&image);
        assert_eq!(data.len(), 6);
        // R plane, G plane, B plane
        assert_relative_eq!(data[0], 1.0, epsilon = 1e-6);
        assert_eq!(&data[1..5], &[0.0, 0.0, 0.0, 0.0]);
        assert_relative_eq!(data[5], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_save_png() {
        let temp_file = std::env::temp_dir().join("raycanvas_test_output.png");
        let mut image = RgbImage::new(3, 2);
        image.put_pixel(2, 1, Rgb([10, 20, 30]));

        save_image_as_png(&image, &temp_file).unwrap();
        let loaded = image::open(&temp_file).unwrap().to_rgb8();
        assert_eq!(*loaded.get_pixel(2, 1), Rgb([10, 20, 30]));

        // Cleanup
        let _ = std::fs::remove_file(&temp_file);
    }
}
