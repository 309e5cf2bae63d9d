//! Bounded payload dispatch table
//!
//! A payload's function signature is matched against a fixed set of
//! descriptors. Anything outside the table is refused; there is no dynamic
//! invocation by name.

use shared::constants::MAX_FEE_RATE_BPS;
use shared::{ExecutionPayload, GovernanceError};
use soroban_sdk::{Address, Env, String, Vec};

use crate::storage;

pub const SET_FEE_RATE: &str = "setFeeRate(uint256)";
pub const SET_PARAMETER: &str = "setParameter(uint32,int128)";
pub const PAUSE: &str = "pause()";
pub const UNPAUSE: &str = "unpause()";

/// Why a payload could not be applied
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DispatchError {
    UnknownSignature = 1,
    ArityMismatch = 2,
    ArgumentOutOfRange = 3,
    UnknownModule = 4,
    ModulePaused = 5,
}

impl From<DispatchError> for GovernanceError {
    fn from(_err: DispatchError) -> Self {
        GovernanceError::PayloadFailed
    }
}

/// A decoded mutation entry point
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    SetFeeRate(u32),
    SetParameter(u32, i128),
    Pause,
    Unpause,
}

fn argument(arguments: &Vec<i128>, index: u32) -> Result<i128, DispatchError> {
    arguments.get(index).ok_or(DispatchError::ArityMismatch)
}

fn expect_arity(arguments: &Vec<i128>, arity: u32) -> Result<(), DispatchError> {
    if arguments.len() != arity {
        return Err(DispatchError::ArityMismatch);
    }
    Ok(())
}

fn to_u32(value: i128) -> Result<u32, DispatchError> {
    u32::try_from(value).map_err(|_| DispatchError::ArgumentOutOfRange)
}

impl Command {
    pub fn decode(
        env: &Env,
        signature: &String,
        arguments: &Vec<i128>,
    ) -> Result<Self, DispatchError> {
        if *signature == String::from_str(env, SET_FEE_RATE) {
            expect_arity(arguments, 1)?;
            let rate = to_u32(argument(arguments, 0)?)?;
            if rate > MAX_FEE_RATE_BPS {
                return Err(DispatchError::ArgumentOutOfRange);
            }
            Ok(Command::SetFeeRate(rate))
        } else if *signature == String::from_str(env, SET_PARAMETER) {
            expect_arity(arguments, 2)?;
            let key = to_u32(argument(arguments, 0)?)?;
            Ok(Command::SetParameter(key, argument(arguments, 1)?))
        } else if *signature == String::from_str(env, PAUSE) {
            expect_arity(arguments, 0)?;
            Ok(Command::Pause)
        } else if *signature == String::from_str(env, UNPAUSE) {
            expect_arity(arguments, 0)?;
            Ok(Command::Unpause)
        } else {
            Err(DispatchError::UnknownSignature)
        }
    }
}

/// Apply `command` to the module at `target`. Nothing is written on failure.
pub fn apply(env: &Env, target: &Address, command: &Command) -> Result<(), DispatchError> {
    let mut state = storage::get_module(env, target).ok_or(DispatchError::UnknownModule)?;

    match command {
        Command::SetFeeRate(rate) => {
            if state.paused {
                return Err(DispatchError::ModulePaused);
            }
            state.fee_rate_bps = *rate;
        }
        Command::SetParameter(key, value) => {
            if state.paused {
                return Err(DispatchError::ModulePaused);
            }
            state.parameters.set(*key, *value);
        }
        Command::Pause => state.paused = true,
        Command::Unpause => state.paused = false,
    }

    storage::save_module(env, target, &state);
    Ok(())
}

/// Decode and apply an authorized payload.
pub fn dispatch(env: &Env, payload: &ExecutionPayload) -> Result<Command, DispatchError> {
    let command = Command::decode(env, &payload.function_signature, &payload.arguments)?;
    apply(env, &payload.target, &command)?;
    Ok(command)
}
