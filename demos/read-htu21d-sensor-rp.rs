#![no_std]
#![no_main]

use defmt::{error, info};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_htu21d_sensor::{
    DEFAULT_ADDRESS, DEFAULT_SENSOR_NAME, HTU21DError, HTU21DSensor, OutputFormat, Report,
};
use embassy_rp::peripherals::I2C0;
use embassy_rp::{bind_interrupts, i2c};
use embassy_time::{Instant, Timer};
use panic_probe as _;

const SENSOR_NAME: &str = DEFAULT_SENSOR_NAME;
const OUTPUT_FORMAT: OutputFormat = OutputFormat::Json;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let p = embassy_rp::init(Default::default());

    let sda = p.PIN_0;
    let scl = p.PIN_1;

    // Configure I2C
    let mut i2c = i2c::I2c::new_async(p.I2C0, scl, sda, Irqs, Default::default());

    let mut sensor = HTU21DSensor::new(&mut i2c, DEFAULT_ADDRESS);

    // One read cycle per boot
    match sensor.read().await {
        Ok(data) => {
            let report = Report::new(SENSOR_NAME, Instant::now().as_secs(), data);
            let mut line: heapless::String<128> = heapless::String::new();
            match report.write(OUTPUT_FORMAT, &mut line) {
                Ok(()) => info!("{}", line.as_str()),
                Err(_) => error!("Report does not fit the line buffer"),
            }
        }
        Err(e) => match e {
            HTU21DError::NotConnected => error!("No sensor at address {=u8:#x}", DEFAULT_ADDRESS),
            HTU21DError::WriteFailed => error!("I2C write failed"),
            HTU21DError::ReadFailed => error!("I2C read failed"),
        },
    }

    loop {
        Timer::after_secs(3600).await;
    }
}
