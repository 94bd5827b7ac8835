use embassy_time::Delay;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::{Error, ErrorKind, I2c, NoAcknowledgeSource};

use crate::conversion::{celsius, fahrenheit, masked_code, relative_humidity};
use crate::{Command, HTU21DError, HTU21DResponse, SETTLE_DELAY_MS, Temperature};

pub struct HTU21DSensor<'a, T: I2c, D: DelayNs = Delay> {
    i2c: &'a mut T,
    address: u8,
    delay: D,
}

impl<'a, T: I2c> HTU21DSensor<'a, T> {
    pub fn new(i2c: &'a mut T, address: u8) -> Self {
        Self::with_delay(i2c, address, Delay)
    }
}

impl<'a, T: I2c, D: DelayNs> HTU21DSensor<'a, T, D> {
    pub fn with_delay(i2c: &'a mut T, address: u8, delay: D) -> Self {
        Self {
            i2c,
            address,
            delay,
        }
    }

    /// Temperature first, then humidity. Either failure discards the whole reading.
    pub async fn read(&mut self) -> Result<HTU21DResponse, HTU21DError> {
        let temperature = self.measure_temperature().await?;
        let humidity = self.measure_humidity().await?;
        Ok(HTU21DResponse {
            temperature,
            humidity,
        })
    }

    pub async fn measure_temperature(&mut self) -> Result<Temperature, HTU21DError> {
        let code = self.measure(Command::TemperatureNoHold).await?;
        let celsius = celsius(code);
        let temperature = Temperature {
            celsius,
            fahrenheit: fahrenheit(celsius),
        };
        debug!(
            "Temperature: {}°C / {}°F",
            temperature.celsius, temperature.fahrenheit
        );
        Ok(temperature)
    }

    pub async fn measure_humidity(&mut self) -> Result<f64, HTU21DError> {
        let code = self.measure(Command::HumidityNoHold).await?;
        let humidity = relative_humidity(code);
        debug!("Humidity: {}%", humidity);
        Ok(humidity)
    }

    async fn measure(&mut self, command: Command) -> Result<u16, HTU21DError> {
        trace!("Sending command {:?}", command);
        self.i2c_write(&[command.byte()]).await?;

        self.delay.delay_ms(SETTLE_DELAY_MS).await;

        let mut buf = [0u8; 2];
        self.i2c_read(&mut buf).await?;
        let code = masked_code(buf);
        debug!("Received I2C data: {:?} -> code {}", buf, code);
        Ok(code)
    }

    async fn i2c_write(&mut self, write: &[u8]) -> Result<(), HTU21DError> {
        match self.i2c.write(self.address, write).await {
            Ok(_) => Ok(()),
            Err(e) => Err(bus_error(e.kind(), HTU21DError::WriteFailed)),
        }
    }

    async fn i2c_read(&mut self, read: &mut [u8]) -> Result<(), HTU21DError> {
        match self.i2c.read(self.address, read).await {
            Ok(_) => Ok(()),
            Err(e) => Err(bus_error(e.kind(), HTU21DError::ReadFailed)),
        }
    }
}

fn bus_error(kind: ErrorKind, io: HTU21DError) -> HTU21DError {
    let error = match kind {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) => HTU21DError::NotConnected,
        _ => io,
    };
    warn!("I2C error: {:?}", error);
    error
}
