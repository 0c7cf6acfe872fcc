//! Password composer - pool building, category coverage and assembly.

use rand::{CryptoRng, RngCore};
use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::charset::is_similar;
use crate::options::GenerationOptions;
use crate::random::{csprng, secure_random_int, secure_shuffle, RandomError};

/// Concatenates the alphabets of the enabled categories in composition
/// order, dropping similar characters when requested.
///
/// Returns an empty string when no category is enabled.
pub fn build_pool(options: &GenerationOptions) -> String {
    options
        .enabled()
        .flat_map(|category| category.alphabet().chars())
        .filter(|c| !options.exclude_ambiguous || !is_similar(*c))
        .collect()
}

/// Draws one character from each enabled category's filtered alphabet.
///
/// A category whose alphabet is emptied by filtering contributes nothing.
pub fn guaranteed_characters<R>(
    rng: &mut R,
    options: &GenerationOptions,
) -> Result<Vec<char>, RandomError>
where
    R: RngCore + CryptoRng,
{
    let mut chars = Vec::with_capacity(options.categories.len());
    for category in options.enabled() {
        let alphabet = category.filtered_alphabet(options.exclude_ambiguous);
        if alphabet.is_empty() {
            continue;
        }
        chars.push(alphabet[secure_random_int(rng, alphabet.len())?]);
    }
    Ok(chars)
}

/// Generates one password from `rng`.
///
/// The result holds exactly `options.length` characters with at least one
/// from every enabled category, as long as the length leaves room for
/// them. When it does not, the guaranteed characters are shuffled and
/// cut down to the requested length.
///
/// An empty pool (no category enabled) yields an empty password.
///
/// The length is not bounded here; callers are expected to run
/// [`GenerationOptions::validate`] first. An absurd length such as
/// `usize::MAX` panics on allocation.
///
/// # Errors
///
/// Returns error if the random source fails.
pub fn generate_password_with<R>(
    rng: &mut R,
    options: &GenerationOptions,
) -> Result<SecretString, RandomError>
where
    R: RngCore + CryptoRng,
{
    let pool: Vec<char> = build_pool(options).chars().collect();
    if pool.is_empty() {
        return Ok(SecretString::new(String::new().into()));
    }

    let mut chars = guaranteed_characters(rng, options)?;
    if chars.len() > options.length {
        secure_shuffle(rng, &mut chars)?;
        chars.truncate(options.length);
    }

    let remaining = options.length - chars.len();
    chars.reserve(remaining);
    for _ in 0..remaining {
        chars.push(pool[secure_random_int(rng, pool.len())?]);
    }

    secure_shuffle(rng, &mut chars)?;
    let password: String = chars.into_iter().collect();
    Ok(SecretString::new(password.into()))
}

/// Generates one password from the operating system RNG.
///
/// # Errors
///
/// Returns error if the operating system RNG is unavailable.
pub fn generate_password(options: &GenerationOptions) -> Result<SecretString, RandomError> {
    generate_password_with(&mut csprng(), options)
}

/// Generates `count` independent passwords from `rng`.
///
/// # Arguments
/// * `rng` - Secure random source
/// * `options` - Generation options shared by every password
/// * `count` - Number of passwords to produce
/// * `token` - Optional cancellation token (async feature only)
///
/// # Returns
/// The generated passwords. On cancellation, the ones produced so far.
pub fn generate_batch_with<R>(
    rng: &mut R,
    options: &GenerationOptions,
    count: usize,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Result<Vec<SecretString>, RandomError>
where
    R: RngCore + CryptoRng,
{
    let mut passwords = Vec::with_capacity(count);

    for _ in 0..count {
        // Check cancellation before each password (async only)
        #[cfg(feature = "async")]
        {
            if let Some(ref t) = token {
                if t.is_cancelled() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        "Batch cancelled after {} of {} passwords",
                        passwords.len(),
                        count
                    );
                    break;
                }
            }
        }

        passwords.push(generate_password_with(rng, options)?);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Generated {} passwords of length {}",
        passwords.len(),
        options.length
    );

    Ok(passwords)
}

/// Generates `count` independent passwords from the operating system RNG.
///
/// # Errors
///
/// Returns error if the operating system RNG is unavailable.
pub fn generate_batch(
    options: &GenerationOptions,
    count: usize,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Result<Vec<SecretString>, RandomError> {
    let mut rng = csprng();

    #[cfg(feature = "async")]
    return generate_batch_with(&mut rng, options, count, token);

    #[cfg(not(feature = "async"))]
    return generate_batch_with(&mut rng, options, count);
}

/// Async version that sends each password via channel as it is generated.
///
/// Stops early on cancellation or once the receiver is gone.
///
/// # Errors
///
/// Returns error if the operating system RNG is unavailable.
#[cfg(feature = "async")]
pub async fn generate_batch_tx(
    options: GenerationOptions,
    count: usize,
    token: CancellationToken,
    tx: mpsc::Sender<SecretString>,
) -> Result<(), RandomError> {
    generate_batch_tx_with(csprng(), options, count, token, tx).await
}

/// Channel variant of [`generate_batch_with`], drawing from `rng`.
///
/// A random source failure ends the batch and is returned, so a short
/// batch on the receiver side is never mistaken for a finished one.
#[cfg(feature = "async")]
pub async fn generate_batch_tx_with<R>(
    mut rng: R,
    options: GenerationOptions,
    count: usize,
    token: CancellationToken,
    tx: mpsc::Sender<SecretString>,
) -> Result<(), RandomError>
where
    R: RngCore + CryptoRng,
{
    #[cfg(feature = "tracing")]
    tracing::info!("batch generation of {} passwords is about to start...", count);

    for _ in 0..count {
        if token.is_cancelled() {
            break;
        }

        let password = generate_password_with(&mut rng, &options)?;

        if let Err(_e) = tx.send(password).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send generated password: {}", _e);
            break;
        }
    }

    Ok(())
}
